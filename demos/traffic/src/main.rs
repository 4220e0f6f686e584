use smart_enum::{EnumDescriptor, Registry, SmartEnum};
use tracing_subscriber::EnvFilter;

smart_enum::smart_enum! {
    /// Phases of a traffic light.
    enum Light {
        Red = 1,
        RedAmber,
        Green,
        Amber,
    }
}

#[derive(SmartEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Crossing {
    Wait,
    Walk = 10,
    Flash,
}

const DEFAULT_LOG_FILTER: &str = "debug";

/// `RUST_LOG` if it is set and valid, `debug` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Print the tables for an enumerator list given on the command line.
fn describe(declaration: &str) -> Result<(), smart_enum::Error> {
    let descriptor = EnumDescriptor::parse(declaration)?;
    for entry in descriptor.entries() {
        println!("{:>12} = {}", entry.name, entry.value);
    }
    if let Some(first) = descriptor.list().first() {
        println!("first value is named {}", descriptor.name_of(*first)?);
    }
    Ok(())
}

fn main() -> Result<(), smart_enum::Error> {
    init_tracing();

    let registry = Registry::global();
    registry.register::<Light>()?;
    registry.register::<Crossing>()?;
    tracing::info!(enums = registry.len(), "enum tables ready");

    for light in Light::list() {
        let crossing = match light {
            Light::Green => Crossing::Walk,
            Light::Amber => Crossing::Flash,
            Light::Red | Light::RedAmber => Crossing::Wait,
        };
        println!("{:<9} ({}) -> {}", light, light.to_value(), crossing);
    }

    let args: Vec<_> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [declaration] => describe(declaration)?,
        [declaration, name] => {
            let descriptor = EnumDescriptor::parse(declaration)?;
            println!("{} = {}", name, descriptor.value_of(name)?);
        }
        _ => {
            eprintln!("usage: smart_enum_traffic [DECLARATION [NAME]]");
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("warn")).to_string(), "warn");
        assert_eq!(log_filter(Some("trace")).to_string(), "trace");
    }

    #[test]
    fn test_log_filter_defaults_to_debug() {
        assert_eq!(log_filter(None).to_string(), "debug");
        assert_eq!(log_filter(Some("smart_enum=loud")).to_string(), "debug");
    }
}
