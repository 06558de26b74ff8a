use loggo::{Flags, LoggerConfig, MemorySink, Registry, SeverityLayer};
use regex::Regex;
use tracing_subscriber::layer::SubscriberExt;

#[cfg(test)]
mod tests {
    use super::*;

    fn with_layer<F: FnOnce()>(layer: SeverityLayer, f: F) {
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
    }

    fn bare_registry(memory: &MemorySink) -> Registry {
        let cfg = LoggerConfig {
            flags: Flags::NONE,
            ..Default::default()
        };
        Registry::from_config(&cfg, memory.sink())
    }

    // ==================== level mapping tests ====================

    #[test]
    fn test_tracing_levels_land_on_matching_tags() {
        let memory = MemorySink::new();

        with_layer(SeverityLayer::new(bare_registry(&memory)), || {
            tracing::error!("e");
            tracing::warn!("w");
            tracing::info!("i");
            tracing::debug!("d");
            tracing::trace!("t");
        });

        assert_eq!(
            memory.lines(),
            vec!["<3>e", "<4>w", "<6>i", "<7>d", "<7>t"]
        );
    }

    // ==================== message rendering tests ====================

    #[test]
    fn test_fields_follow_message() {
        let memory = MemorySink::new();

        with_layer(SeverityLayer::new(bare_registry(&memory)), || {
            tracing::warn!(user = "bob", attempts = 3, "login failed");
        });

        assert_eq!(memory.lines(), vec!["<4>login failed user=bob attempts=3"]);
    }

    #[test]
    fn test_with_target_prefixes_message() {
        let memory = MemorySink::new();
        let layer = SeverityLayer::new(bare_registry(&memory)).with_target(true);

        with_layer(layer, || {
            tracing::info!(target: "billing", "invoice sent");
        });

        assert_eq!(memory.lines(), vec!["<6>billing: invoice sent"]);
    }

    #[test]
    fn test_standard_flags_add_timestamp() {
        let memory = MemorySink::new();

        with_layer(SeverityLayer::new(Registry::with_sink(memory.sink())), || {
            tracing::info!("up");
        });

        let shape = Regex::new(r"^<6>\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} up$").unwrap();
        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        assert!(shape.is_match(&lines[0]), "{:?}", lines[0]);
    }

    #[test]
    fn test_file_flags_use_event_location() {
        let memory = MemorySink::new();
        let cfg = LoggerConfig {
            flags: Flags::SHORT_FILE,
            ..Default::default()
        };
        let registry = Registry::from_config(&cfg, memory.sink());

        let mut line = 0;
        with_layer(SeverityLayer::new(registry), || {
            line = line!() + 1;
            tracing::error!("located");
        });

        assert_eq!(memory.lines(), vec![format!("<3>layer_tests.rs:{}: located", line)]);
    }
}
