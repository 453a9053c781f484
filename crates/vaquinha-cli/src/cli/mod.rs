//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here. No business logic.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "vaquinha",
    bin_name = "vaquinha",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Record and review donations to a campaign",
    long_about = "Vaquinha validates donations against the campaign rules \
                  (donor data, amount limits, billing address and card), \
                  records the accepted ones and reports progress toward the goal.",
    after_help = "EXAMPLES:\n\
        \x20 vaquinha donate --name \"Maria Silva\" --email maria@example.com --amount 50,00 \\\n\
        \x20     --street \"Rua das Flores\" --number 100 --city \"São Paulo\" --state SP --cep 01234-567 \\\n\
        \x20     --card-holder \"MARIA SILVA\" --card-number 4111111111111111 --card-expiry 12/30 --card-cvv 123\n\
        \x20 vaquinha summary\n\
        \x20 vaquinha donors --format csv",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and record a donation.
    #[command(
        visible_alias = "d",
        about = "Validate and record a donation",
        after_help = "Rejected donations are not recorded; every failing rule is \
                      printed and the exit code is 2."
    )]
    Donate(DonateArgs),

    /// Validate a donation without recording it.
    #[command(
        visible_alias = "check",
        about = "Validate a donation without recording it"
    )]
    Validate(ValidateArgs),

    /// Show campaign totals.
    #[command(visible_alias = "s", about = "Show campaign totals")]
    Summary(SummaryArgs),

    /// List donors, newest first.
    #[command(
        visible_alias = "ls",
        about = "List donors",
        after_help = "EXAMPLES:\n\
            \x20 vaquinha donors\n\
            \x20 vaquinha donors --limit 10\n\
            \x20 vaquinha donors --format json"
    )]
    Donors(DonorsArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 vaquinha init           # per-user config\n\
            \x20 vaquinha init --local   # vaquinha.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vaquinha completions bash > ~/.local/share/bash-completion/completions/vaquinha\n\
            \x20 vaquinha completions zsh  > ~/.zfunc/_vaquinha"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vaquinha config get campaign.goal\n\
            \x20 vaquinha config list\n\
            \x20 vaquinha config path"
    )]
    Config(ConfigCommands),
}

// ── donation form ─────────────────────────────────────────────────────────────

/// The donation form. Every field is optional so that incomplete
/// submissions reach validation and get reported in full.
#[derive(Debug, Default, Args)]
pub struct DonationForm {
    #[arg(long = "name", value_name = "NAME", help = "Donor name")]
    pub name: Option<String>,

    #[arg(long = "email", value_name = "EMAIL", help = "Donor email")]
    pub email: Option<String>,

    /// Amount in reais, e.g. `50`, `50.00`, `1.234,56` or `R$ 50,00`.
    #[arg(long = "amount", value_name = "VALUE", help = "Donation amount in R$")]
    pub amount: Option<String>,

    #[arg(long = "anonymous", help = "Hide the donor name on the public list")]
    pub anonymous: bool,

    #[arg(long = "message", value_name = "TEXT", help = "Message of support")]
    pub message: Option<String>,

    #[command(flatten)]
    pub address: AddressForm,

    #[command(flatten)]
    pub payment: PaymentForm,
}

/// Billing address. Attached only when at least one field is given.
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Billing address")]
pub struct AddressForm {
    #[arg(long = "street", value_name = "STREET")]
    pub street: Option<String>,

    #[arg(long = "number", value_name = "NUMBER")]
    pub number: Option<String>,

    #[arg(long = "complement", value_name = "TEXT")]
    pub complement: Option<String>,

    #[arg(long = "city", value_name = "CITY")]
    pub city: Option<String>,

    #[arg(long = "state", value_name = "UF")]
    pub state: Option<String>,

    #[arg(long = "cep", visible_alias = "postal-code", value_name = "CEP")]
    pub postal_code: Option<String>,

    #[arg(long = "phone", value_name = "PHONE")]
    pub phone: Option<String>,
}

impl AddressForm {
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.number,
            &self.complement,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.phone,
        ]
        .iter()
        .all(|f| f.is_none())
    }
}

/// Payment method. Attached only when `--payment` or a card field is given.
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Payment")]
pub struct PaymentForm {
    /// Payment method kind. Only `credit-card` is accepted.
    #[arg(long = "payment", value_name = "KIND")]
    pub kind: Option<String>,

    #[arg(long = "card-holder", value_name = "NAME")]
    pub holder: Option<String>,

    #[arg(id = "card_number", long = "card-number", value_name = "NUMBER")]
    pub number: Option<String>,

    #[arg(long = "card-expiry", value_name = "MM/YY")]
    pub expiry: Option<String>,

    #[arg(long = "card-cvv", value_name = "CVV")]
    pub cvv: Option<String>,
}

impl PaymentForm {
    pub fn is_empty(&self) -> bool {
        [
            &self.kind,
            &self.holder,
            &self.number,
            &self.expiry,
            &self.cvv,
        ]
        .iter()
        .all(|f| f.is_none())
    }
}

// ── donate / validate ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DonateArgs {
    #[command(flatten)]
    pub form: DonationForm,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: DonationForm,
}

// ── summary ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Override `campaign.goal` for this run.
    #[arg(long = "goal", value_name = "VALUE", help = "Campaign goal in R$")]
    pub goal: Option<String>,
}

// ── donors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DonorsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: DonorsFormat,

    #[arg(short = 'n', long = "limit", value_name = "N", help = "Show at most N donors")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DonorsFormat {
    /// Human-readable table.
    Table,
    /// One donor name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows with a header.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `vaquinha.toml` to the current directory instead.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `campaign.goal`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the per-user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_full_donation() {
        let cli = Cli::parse_from([
            "vaquinha",
            "donate",
            "--name",
            "Maria",
            "--email",
            "maria@example.com",
            "--amount",
            "50,00",
            "--cep",
            "01234-567",
            "--card-number",
            "4111111111111111",
        ]);
        let Commands::Donate(args) = cli.command else {
            panic!("expected Donate command");
        };
        assert_eq!(args.form.amount.as_deref(), Some("50,00"));
        assert_eq!(args.form.address.postal_code.as_deref(), Some("01234-567"));
        assert!(!args.form.address.is_empty());
        assert!(!args.form.payment.is_empty());
    }

    #[test]
    fn empty_form_has_no_attachments() {
        let cli = Cli::parse_from(["vaquinha", "validate"]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert!(args.form.address.is_empty());
        assert!(args.form.payment.is_empty());
        assert!(!args.form.anonymous);
    }

    #[test]
    fn postal_code_alias() {
        let cli = Cli::parse_from(["vaquinha", "check", "--postal-code", "01234567"]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.form.address.postal_code.as_deref(), Some("01234567"));
    }

    #[test]
    fn donors_format_defaults_to_table() {
        let cli = Cli::parse_from(["vaquinha", "donors"]);
        let Commands::Donors(args) = cli.command else {
            panic!("expected Donors command");
        };
        assert_eq!(args.format, DonorsFormat::Table);
        assert_eq!(args.limit, None);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["vaquinha", "--quiet", "--verbose", "summary"]);
        assert!(result.is_err());
    }
}
