//! bitseq demo binary, Russian variant: 10 digits.

use bitseq_demo::{DemoConfig, main_with};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    main_with(&DemoConfig::russian())?;
    Ok(())
}
