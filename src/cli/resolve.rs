//! `docsite resolve`: emit the resolved configuration for the site generator.

use anyhow::Result;

use crate::{cli::args::ResolveArgs, cli::common::write_output, config::SiteConfig, log};

pub fn output_config(config: &SiteConfig, args: &ResolveArgs) -> Result<()> {
    let json = config.to_json(args.pretty)?;
    write_output(&json, args.output.as_deref())?;

    if let Some(ref output_path) = args.output {
        log!("resolve"; "wrote resolved config to {}", output_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PartialSiteConfig, test_parse_config};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_output_to_file_reads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resolved.json");
        let config = test_parse_config("customCss = [\"./a.css\"]");

        let args = ResolveArgs {
            pretty: true,
            output: Some(path.clone()),
        };
        output_config(&config, &args).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"title\": \"Test\""));

        let again = PartialSiteConfig::from_json_str(&written)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(again, config);
    }
}
