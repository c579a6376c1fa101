#[cfg(test)]
pub mod test {
    use std::path::Path;

    use serde::Serialize;

    use crate::configurable::Configurable;
    use crate::document::Document;
    use crate::value::read_value;

    /// Parse a document in tests, panicking on bad fixtures.
    pub fn parse(text: &str) -> Document {
        Document::parse(text, Path::new("test.config")).unwrap()
    }

    /// A second configurable type, so the loader is exercised beyond
    /// `ServerConfig`.
    #[derive(Serialize, Debug, Clone, PartialEq)]
    pub struct LimitsConfig {
        pub max_connections: u16,
        pub strict: bool,
        pub label: String,
    }

    impl Default for LimitsConfig {
        fn default() -> Self {
            Self {
                max_connections: 512,
                strict: false,
                label: "default".into(),
            }
        }
    }

    impl Configurable for LimitsConfig {
        const NAME: &'static str = "limits.config";

        fn from_document(document: &Document) -> Self {
            let default = Self::default();
            Self {
                max_connections: read_value(
                    document.node("max_connections"),
                    default.max_connections,
                ),
                strict: read_value(document.node("strict"), default.strict),
                label: read_value(document.node("label"), default.label),
            }
        }
    }

    #[test]
    fn limits_loads_defaults_from_comment_only_document() {
        let config = LimitsConfig::from_document(&parse("# empty\n"));
        assert_eq!(config, LimitsConfig::default());
    }

    #[test]
    fn limits_reads_present_fields() {
        let config = LimitsConfig::from_document(&parse(
            "max_connections = 64\nstrict = true\nlabel = \"edge\"\n",
        ));
        assert_eq!(config.max_connections, 64);
        assert!(config.strict);
        assert_eq!(config.label, "edge");
    }
}
