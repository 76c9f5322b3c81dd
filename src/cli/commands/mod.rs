//! One module per subcommand.

pub mod dec;
pub mod enc;
