pub mod address;
pub mod donation;
pub mod payment_method;

pub use address::Address;
pub use donation::{Donation, DonationBuilder};
pub use payment_method::{CreditCard, PaymentKind, PaymentMethod};
