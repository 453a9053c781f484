//! Donation repository adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileDonationRepository;
pub use memory::InMemoryDonationRepository;
