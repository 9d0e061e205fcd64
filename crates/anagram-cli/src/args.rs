//! Startup flags. Arguments are matched case-insensitively; anything
//! unrecognized is ignored.

const LICENSE_FLAGS: &[&str] = &["-l", "--license"];

/// True if any argument asks for the license/about text.
pub fn wants_license<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| {
        let arg = arg.as_ref().to_lowercase();
        LICENSE_FLAGS.contains(&arg.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_flags() {
        assert!(wants_license(["-l"]));
        assert!(wants_license(["--license"]));
        assert!(wants_license(["-L"]));
        assert!(wants_license(["foo", "--LICENSE", "bar"]));
    }

    #[test]
    fn test_other_args_ignored() {
        assert!(!wants_license(Vec::<String>::new()));
        assert!(!wants_license(["--lic", "-x", "license", "-ll"]));
    }
}
