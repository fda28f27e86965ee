use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use toml_edit::{DocumentMut, value};

trait ConfigSerializeDefault {
    fn fix_config(self, name: &str, doc: &mut DocumentMut);
}

macro_rules! impl_simple_default {
    ( $( $type:ty ),* ) => {
        $(
            impl ConfigSerializeDefault for $type {
                fn fix_config(self, name: &str, doc: &mut DocumentMut) {
                    doc.entry(name).or_insert_with(|| value(self));
                }
            }
        )*
    }
}

impl_simple_default!(String, bool);

macro_rules! gen_config {
    (
        $( $(#[$meta:meta])* $name:ident: $type:ty = $default:expr),* $(,)?
    ) => {
        #[derive(Debug, Deserialize)]
        pub struct Config {
            $(
                $(#[$meta])*
                pub $name: $type,
            )*
        }

        impl Config {
            /// Reads the configuration file, adding any missing key with its
            /// default value and writing the result back when it changed.
            pub fn load(path: &Path) -> Result<Config> {
                let original = match fs::read_to_string(path) {
                    Ok(contents) => contents,
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
                    Err(err) => {
                        return Err(err).with_context(|| format!("reading {}", path.display()))
                    }
                };
                let mut doc = original
                    .parse::<DocumentMut>()
                    .with_context(|| format!("parsing {}", path.display()))?;

                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*

                let patched = doc.to_string();
                if original != patched {
                    fs::write(path, &patched)
                        .with_context(|| format!("writing {}", path.display()))?;
                }

                toml::from_str(&patched).with_context(|| format!("loading {}", path.display()))
            }
        }
    };
}

gen_config! {
    /// Command catalog to load definitions from.
    catalog: String = "commands.toml".to_string(),
    log_directory: String = "./logs".to_string(),
    /// Print interpretation failures instead of only logging them.
    echo_unknown: bool = true,
}
