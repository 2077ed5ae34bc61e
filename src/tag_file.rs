use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::LoadError;
use crate::core::tag::{Tag, TagList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFormat {
    Json,
    Yaml,
}

impl TagFormat {
    /// `.json` files are JSON, everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Reads a list of `{id, name}` records, keeping file order.
pub fn load_tags(path: impl AsRef<Path>) -> Result<TagList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tags = parse_tags(&content, TagFormat::from_path(path))?;
    debug!(path = %path.display(), count = tags.len(), "loaded tags");
    Ok(tags)
}

pub fn parse_tags(content: &str, format: TagFormat) -> Result<TagList, LoadError> {
    let tags: Vec<Tag> = match format {
        TagFormat::Json => serde_json::from_str(content)?,
        TagFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(TagList::from(tags))
}

#[cfg(test)]
mod tests {
    use super::{TagFormat, load_tags, parse_tags};
    use crate::config::LoadError;
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn format_follows_extension() {
        assert_eq!(TagFormat::from_path(Path::new("tags.json")), TagFormat::Json);
        assert_eq!(TagFormat::from_path(Path::new("tags.JSON")), TagFormat::Json);
        assert_eq!(TagFormat::from_path(Path::new("tags.yaml")), TagFormat::Yaml);
        assert_eq!(TagFormat::from_path(Path::new("tags")), TagFormat::Yaml);
    }

    #[test]
    fn yaml_keeps_order() {
        let tags = parse_tags(
            "- id: b\n  name: beta\n- id: a\n  name: alpha\n",
            TagFormat::Yaml,
        )
        .expect("tags");
        let names = tags.iter().map(|tag| tag.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_tags("[{\"id\": 1}]", TagFormat::Json).expect_err("bad json");
        assert!(matches!(err, LoadError::JsonParse(_)));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        write!(file, r#"[{{"id":"t1","name":"work"}},{{"id":"t2","name":"home"}}]"#)
            .expect("write tags");

        let tags = load_tags(file.path()).expect("tags");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].id.as_str(), "t1");
    }
}
