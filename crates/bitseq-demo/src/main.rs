//! bitseq demo binary, English variant.
//!
//! # Usage
//!
//! ```bash
//! # Print 128 random digits
//! bitseq-demo
//!
//! # Show generation logs on stderr
//! RUST_LOG=debug bitseq-demo
//! ```

use bitseq_demo::{DemoConfig, main_with};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    main_with(&DemoConfig::english())?;
    Ok(())
}
