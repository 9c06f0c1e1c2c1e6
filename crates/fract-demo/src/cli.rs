use clap::Parser;

/// Command-line options for the demonstration driver.
#[derive(Parser, Debug, Clone)]
#[command(name = "fract-demo")]
#[command(about = "Demonstrates exact rational arithmetic and its error paths")]
pub struct CliConfig {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json: bool,

    /// Numerator of an extra fraction to classify
    #[arg(short, long, allow_hyphen_values = true, requires = "denominator")]
    pub numerator: Option<i64>,

    /// Denominator of an extra fraction to classify
    #[arg(short, long, allow_hyphen_values = true, requires = "numerator")]
    pub denominator: Option<i64>,
}

impl CliConfig {
    /// Returns the user-supplied fraction terms, if both were given.
    pub fn extra_terms(&self) -> Option<(i64, i64)> {
        self.numerator.zip(self.denominator)
    }
}
