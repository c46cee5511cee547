//! Subcommand implementations for the `hearth` binary.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;

use hearth_core::loader::encode_file_list;
use hearth_core::runner::command_line;
use hearth_core::{ConfigStore, LaunchContext, PlatformHandler, options, platform_ids};
use hearth_shared::MediaFile;

/// Media selection shared by `load` and `launch`.
#[derive(Args, Debug, Clone, Default)]
pub struct MediaArgs {
    /// Platform name (canonical id or a known alias, e.g. "c64", "atari-st")
    pub platform: String,

    /// Attached file as NAME=SHA1 (repeatable, order matters)
    #[arg(long = "file", value_name = "NAME=SHA1")]
    pub files: Vec<String>,

    /// Attached files as a JSON list of {"name", "sha1"} objects
    #[arg(long, value_name = "JSON", conflicts_with = "files")]
    pub file_list: Option<String>,

    /// Hardware model/variant (platform default when omitted)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    #[command(flatten)]
    pub media: MediaArgs,

    /// Print the backend command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse a `NAME=SHA1` pair. The last `=` separates the hash.
pub fn parse_file_arg(arg: &str) -> Result<MediaFile> {
    let Some((name, sha1)) = arg.rsplit_once('=') else {
        bail!("Expected NAME=SHA1, got '{}'", arg);
    };
    if name.is_empty() || sha1.is_empty() {
        bail!("Expected NAME=SHA1, got '{}'", arg);
    }
    Ok(MediaFile::new(name, sha1))
}

impl MediaArgs {
    /// Build the auxiliary values of an attach event.
    pub fn values(&self) -> Result<ConfigStore> {
        let file_list = match &self.file_list {
            Some(json) => json.clone(),
            None => {
                let files = self
                    .files
                    .iter()
                    .map(|arg| parse_file_arg(arg))
                    .collect::<Result<Vec<_>>>()?;
                encode_file_list(&files)?
            }
        };

        let mut values = ConfigStore::new();
        values.set(options::FILE_LIST, file_list);
        values.set(options::MODEL, self.model.clone().unwrap_or_default());
        Ok(values)
    }

    /// Run the platform loader and return the resulting configuration.
    pub fn load(&self, ctx: &LaunchContext) -> Result<(PlatformHandler, ConfigStore)> {
        let handler = PlatformHandler::for_platform(&self.platform);
        let mut loader = handler.create_loader(ctx)?;

        let mut values = self.values()?;
        let mut config = ConfigStore::new();
        loader
            .load(&mut config, &mut values)
            .with_context(|| format!("Failed to load media for {}", handler.name()))?;
        Ok((handler, config))
    }
}

/// `hearth platforms`
pub fn list_platforms(out: &mut impl Write) -> Result<()> {
    for id in platform_ids() {
        let handler = PlatformHandler::for_platform(id);
        let mut capabilities = Vec::new();
        if handler.has_loader() {
            capabilities.push("loader");
        }
        if handler.has_runner() {
            capabilities.push("runner");
        }
        writeln!(out, "{:<10} {:<18} {}", id, handler.name(), capabilities.join(", "))?;
    }
    Ok(())
}

/// `hearth resolve <name>`
pub fn resolve(name: &str, out: &mut impl Write) -> Result<()> {
    let handler = PlatformHandler::for_platform(name);
    writeln!(out, "{}\t{}", handler.id(), handler.name())?;
    Ok(())
}

/// `hearth load ...`
pub fn load(args: &MediaArgs, ctx: &LaunchContext, out: &mut impl Write) -> Result<()> {
    let (_, config) = args.load(ctx)?;
    for (key, value) in config.iter() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

/// `hearth launch ...`
pub fn launch(args: &LaunchArgs, ctx: &LaunchContext, out: &mut impl Write) -> Result<()> {
    let (handler, config) = args.media.load(ctx)?;
    let runner = handler.create_runner(ctx)?;

    if args.dry_run {
        let cmd = runner.command(&config)?;
        writeln!(out, "{}", command_line(&cmd))?;
        return Ok(());
    }

    let status = runner.run(&config)?;
    if !status.success() {
        bail!("{} exited with {}", handler.name(), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::DispatchError;

    fn media(platform: &str, files: &[&str]) -> MediaArgs {
        MediaArgs {
            platform: platform.to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_file_arg() {
        let file = parse_file_arg("game=1.d64=abc").unwrap();
        assert_eq!(file, MediaFile::new("game=1.d64", "abc"));
        assert!(parse_file_arg("game.d64").is_err());
        assert!(parse_file_arg("=abc").is_err());
        assert!(parse_file_arg("game.d64=").is_err());
    }

    #[test]
    fn test_values_from_file_args() {
        let values = media("c64", &["game.tap=aaa"]).values().unwrap();
        assert_eq!(
            values.get(options::FILE_LIST),
            Some(r#"[{"name":"game.tap","sha1":"aaa"}]"#)
        );
        assert_eq!(values.get(options::MODEL), Some(""));
    }

    #[test]
    fn test_load_prints_slots() {
        let args = media("c64", &["game.tap=aaa", "game2.d64=bbb"]);
        let mut out = Vec::new();
        load(&args, &LaunchContext::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "c64_model = c64c\n\
             floppy_drive_0 = sha1://bbb/game2.d64\n\
             floppy_image_1 = sha1://bbb/game2.d64\n\
             model = \n\
             tape_drive_0 = sha1://aaa/game.tap\n\
             tape_image_0 = sha1://aaa/game.tap\n"
        );
    }

    #[test]
    fn test_load_unsupported_platform_fails() {
        let args = media("amiga", &["disk.adf=aaa"]);
        let err = load(&args, &LaunchContext::default(), &mut Vec::new()).unwrap_err();
        let dispatch = err.downcast_ref::<DispatchError>().unwrap();
        assert!(dispatch.is_capability_unavailable());
    }

    #[test]
    fn test_load_malformed_file_list_fails() {
        let args = MediaArgs {
            platform: "c64".to_string(),
            file_list: Some("not json".to_string()),
            ..Default::default()
        };
        let err = load(&args, &LaunchContext::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DispatchError>(),
            Some(DispatchError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_resolve_prints_id_and_name() {
        let mut out = Vec::new();
        resolve("Super-Famicom", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "snes\tSuper Nintendo\n");
    }

    #[test]
    fn test_list_platforms() {
        let mut out = Vec::new();
        list_platforms(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), platform_ids().len());
        assert!(text.lines().any(|l| l.starts_with("c64") && l.ends_with("loader, runner")));
    }

    #[test]
    fn test_launch_dry_run_prints_command() {
        let args = LaunchArgs {
            media: media("c64", &["game.tap=aaaa"]),
            dry_run: true,
        };
        let mut out = Vec::new();
        launch(&args, &LaunchContext::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("x64sc -model c64c -1 "));
    }
}
