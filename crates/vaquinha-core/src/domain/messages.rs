//! User-facing text. These strings are displayed verbatim and compared
//! byte-for-byte by consumers, so they must not be reformatted.

// ── Donation ─────────────────────────────────────────────────────────────────

pub const NAME_REQUIRED: &str = "O campo Nome é obrigatório.";
pub const EMAIL_REQUIRED: &str = "O campo Email é obrigatório.";
pub const EMAIL_INVALID: &str = "O campo Email é inválido.";
pub const AMOUNT_BELOW_MINIMUM: &str = "Valor mínimo de doação é de R$ 5,00";
// No space after `R$` here, unlike the minimum message.
pub const AMOUNT_ABOVE_MAXIMUM: &str = "Valor máximo para a doação é de R$4.500,00";

pub const BILLING_ADDRESS_MISSING: &str = "Endereço de cobrança não informado";
pub const PAYMENT_METHOD_MISSING: &str = "Forma de pagamento não informada";

// ── Address ──────────────────────────────────────────────────────────────────

pub const STREET_REQUIRED: &str = "O campo Endereço deve ser preenchido";
pub const NUMBER_REQUIRED: &str = "O campo Número deve ser preenchido";
pub const CITY_REQUIRED: &str = "O campo Cidade deve ser preenchido";
pub const STATE_REQUIRED: &str = "O campo Estado deve ser preenchido";
pub const STATE_LENGTH: &str = "O campo Estado deve possuir 2 caracteres";
pub const POSTAL_CODE_REQUIRED: &str = "O campo CEP deve ser preenchido";
pub const POSTAL_CODE_INVALID: &str = "O campo CEP é inválido";

// ── Credit card ──────────────────────────────────────────────────────────────

pub const HOLDER_NAME_REQUIRED: &str = "O campo Nome do Titular é obrigatório.";
pub const CARD_NUMBER_REQUIRED: &str = "O campo Número do Cartão é obrigatório.";
pub const CARD_NUMBER_INVALID: &str = "O campo Número do Cartão é inválido.";
pub const EXPIRY_INVALID: &str = "O campo Validade é inválido.";
pub const CVV_INVALID: &str = "O campo CVV é inválido.";

// ── Campaign pages ───────────────────────────────────────────────────────────

pub const RAISED_LABEL: &str = "Arrecadamos quanto?";
pub const REMAINING_LABEL: &str = "Quanto falta arrecadar?";
pub const DONORS_HEADER: &str = "Veja quem já doou!";
pub const NO_DONATIONS_YET: &str = "Ainda não houveram doações. Seja você o primeiro!";
pub const DONATE_NOW: &str = "Doe agora";

pub const ANONYMOUS_DONOR: &str = "Anônimo";
