use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "romdoc")]
#[command(version)]
#[command(about = "Generates markdown tables from FX68K microcode and nanocode ROM dumps", long_about = None)]
pub(crate) struct Cli {
    /// Microcode ROM dump, one 17-bit word per line
    #[arg(long, default_value = "../rtl/microrom.mem")]
    pub(crate) microrom: PathBuf,

    /// Nanocode ROM dump, one 68-bit word per line
    #[arg(long, default_value = "../rtl/nanorom.mem")]
    pub(crate) nanorom: PathBuf,

    /// Directory that receives microcode_table.md and nanocode_table.md
    #[arg(short, long, default_value = ".")]
    pub(crate) out_dir: PathBuf,

    /// Show the documented sub-fields of Seq and the nanocode ALU selects
    #[arg(long)]
    pub(crate) expand_subfields: bool,

    /// Also write the decoded rows of both ROMs as JSON
    #[arg(long)]
    pub(crate) json: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["romdoc"]).unwrap();
        assert_eq!(cli.microrom, PathBuf::from("../rtl/microrom.mem"));
        assert_eq!(cli.nanorom, PathBuf::from("../rtl/nanorom.mem"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(!cli.expand_subfields);
        assert!(cli.json.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "romdoc",
            "--microrom",
            "micro.mem",
            "--nanorom",
            "nano.mem",
            "-o",
            "docs",
            "--expand-subfields",
            "--json",
            "rows.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.microrom, PathBuf::from("micro.mem"));
        assert_eq!(cli.out_dir, PathBuf::from("docs"));
        assert!(cli.expand_subfields);
        assert_eq!(cli.json, Some(PathBuf::from("rows.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_flag() {
        assert!(Cli::try_parse_from(["romdoc", "--format", "hex"]).is_err());
    }
}
