use clap::ValueEnum;

use crate::app::api::{self, ParamsFormat};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ParamsFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ParamsFormat::Text,
            FormatArg::Json => ParamsFormat::Json,
        }
    }
}

pub fn run_params(format: FormatArg) -> Result<(), AppError> {
    let rendered = api::params(format.into())?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
