//! Generate command.

use zeroize::Zeroizing;

use crate::cli::GenerateArgs;
use crate::core::password::PasswordPolicy;
use crate::error::Result;

/// Print one random password.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let policy = policy(&args);
    let password = Zeroizing::new(policy.generate()?);
    println!("{}", password.as_str());
    Ok(())
}

fn policy(args: &GenerateArgs) -> PasswordPolicy {
    PasswordPolicy {
        length: args.length,
        include_uppercase: !args.no_uppercase,
        include_lowercase: !args.no_lowercase,
        include_digits: !args.no_digits,
        include_symbols: !args.no_symbols,
        exclude_chars: args.exclude.clone().unwrap_or_default(),
        avoid_ambiguous: args.avoid_ambiguous,
    }
}
