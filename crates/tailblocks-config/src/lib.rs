use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tailblocks_engine::models::*;
use tailblocks_engine::{BlockKind, CatalogError};
use thiserror::Error;

const DEFAULT_TITLE: &str = "tailblocks gallery";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Override given for an unknown block: {source}")]
    UnknownBlock { source: CatalogError },

    #[error("Block {block} is listed more than once")]
    DuplicateBlock { block: BlockKind },

    #[error("Invalid override for block {block}: {source}")]
    BlockParseError {
        block: BlockKind,
        source: toml::de::Error,
    },
}

/// Gallery settings plus per-block content overrides.
///
/// ```toml
/// title = "Landing page kit"
/// blocks = ["nav-preline-mega", "footer-daisyui-grid"]
///
/// [overrides.footer-daisyui-grid]
/// company_name = "Initech"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Blocks to show, in order. All blocks when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<BlockKind>>,
    /// Default destination of the static HTML export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    /// Partial configuration tables keyed by block id
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, toml::Table>,
}

impl GalleryConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::from_toml_str(&content).map_err(|source| {
            ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        // Expand shell variables and tilde in the export destination
        config.export_path = config
            .export_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/tailblocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Blocks to render, in display order. Repeats after the first are skipped.
    pub fn blocks(&self) -> Vec<BlockKind> {
        match &self.blocks {
            Some(blocks) => {
                let mut seen = HashSet::new();
                blocks
                    .iter()
                    .copied()
                    .filter(|kind| seen.insert(*kind))
                    .collect()
            }
            None => BlockKind::ALL.to_vec(),
        }
    }

    /// Deserialize the override table for `kind` into its partial config.
    ///
    /// A block without overrides yields an empty partial, i.e. all defaults.
    pub fn partial<P>(&self, kind: BlockKind) -> Result<P, ConfigError>
    where
        P: DeserializeOwned + Default,
    {
        match self.overrides.get(kind.id()) {
            Some(table) => toml::Value::Table(table.clone())
                .try_into()
                .map_err(|source| ConfigError::BlockParseError {
                    block: kind,
                    source,
                }),
            None => Ok(P::default()),
        }
    }

    /// Store `partial` as the override table for `kind`.
    pub fn set_partial<P: Serialize>(&mut self, kind: BlockKind, partial: &P) -> anyhow::Result<()> {
        let table = match toml::Value::try_from(partial)? {
            toml::Value::Table(table) => table,
            other => anyhow::bail!("Override for {kind} is a {}, not a table", other.type_str()),
        };
        if table.is_empty() {
            self.overrides.remove(kind.id());
        } else {
            self.overrides.insert(kind.id().to_string(), table);
        }
        Ok(())
    }

    /// Check the block list has no repeats and every override names a known
    /// block and matches its shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for &block in self.blocks.iter().flatten() {
            if !seen.insert(block) {
                return Err(ConfigError::DuplicateBlock { block });
            }
        }
        for id in self.overrides.keys() {
            let kind: BlockKind = id
                .parse()
                .map_err(|source| ConfigError::UnknownBlock { source })?;
            self.check_partial(kind)?;
        }
        Ok(())
    }

    fn check_partial(&self, kind: BlockKind) -> Result<(), ConfigError> {
        match kind {
            BlockKind::NavFlowbiteBasic => self.partial::<PartialBasicNavConfig>(kind).map(drop),
            BlockKind::NavFlowbiteDropdown => {
                self.partial::<PartialDropdownNavConfig>(kind).map(drop)
            }
            BlockKind::NavPrelineMega => self.partial::<PartialMegaMenuNavConfig>(kind).map(drop),
            BlockKind::NavDaisyUiSearch => self.partial::<PartialSearchNavConfig>(kind).map(drop),
            BlockKind::HeroDaisyUiGradient => {
                self.partial::<PartialGradientHeroConfig>(kind).map(drop)
            }
            BlockKind::HeroFlowbiteSplit => self.partial::<PartialSplitHeroConfig>(kind).map(drop),
            BlockKind::HeroHeadlessUiTabs => self.partial::<PartialTabsHeroConfig>(kind).map(drop),
            BlockKind::HeroPrelineCta => self.partial::<PartialCtaHeroConfig>(kind).map(drop),
            BlockKind::HeroTailwindStats => self.partial::<PartialStatsHeroConfig>(kind).map(drop),
            BlockKind::FooterDaisyUiGrid => self.partial::<PartialGridFooterConfig>(kind).map(drop),
            BlockKind::FooterFlowbiteNewsletter => {
                self.partial::<PartialNewsletterFooterConfig>(kind).map(drop)
            }
            BlockKind::FooterFlowbiteSimple => {
                self.partial::<PartialBrandFooterConfig>(kind).map(drop)
            }
            BlockKind::FooterHeadlessUiDisclosure => {
                self.partial::<PartialDisclosureFooterConfig>(kind).map(drop)
            }
            BlockKind::FooterPrelineLinks => {
                self.partial::<PartialLinksFooterConfig>(kind).map(drop)
            }
            BlockKind::FooterTailwindCorporate => {
                self.partial::<PartialCorporateFooterConfig>(kind).map(drop)
            }
            BlockKind::FooterTailwindSimple => {
                self.partial::<PartialSimpleFooterConfig>(kind).map(drop)
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tailblocks_engine::Resolve;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
title = "Landing page kit"
blocks = ["nav-preline-mega", "footer-daisyui-grid"]

[overrides.footer-daisyui-grid]
company_name = "Initech"

[[overrides.footer-daisyui-grid.sections]]
title = "Docs"
links = [{ name = "API", href = "/api" }]
"#;

    #[test]
    fn test_config_path() {
        let config_path = GalleryConfig::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/tailblocks/config.toml"));
    }

    #[test]
    fn test_empty_config_means_full_gallery_of_defaults() {
        let config = GalleryConfig::from_toml_str("").unwrap();

        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.blocks(), BlockKind::ALL.to_vec());
        let grid: PartialGridFooterConfig = config.partial(BlockKind::FooterDaisyUiGrid).unwrap();
        assert_eq!(grid, PartialGridFooterConfig::default());
    }

    #[test]
    fn test_block_subset_and_overrides() {
        let config = GalleryConfig::from_toml_str(SAMPLE).unwrap();
        config.validate().unwrap();

        assert_eq!(config.title(), "Landing page kit");
        assert_eq!(
            config.blocks(),
            vec![BlockKind::NavPrelineMega, BlockKind::FooterDaisyUiGrid]
        );

        let grid = config
            .partial::<PartialGridFooterConfig>(BlockKind::FooterDaisyUiGrid)
            .unwrap()
            .resolve_defaults();
        assert_eq!(grid.company_name, "Initech");
        assert_eq!(grid.sections.len(), 1);
        assert_eq!(grid.sections[0].links[0].href, "/api");
    }

    #[test]
    fn test_unknown_block_override_is_rejected() {
        let config = GalleryConfig::from_toml_str(
            r#"
[overrides.footer-bootstrap]
company_name = "Nope"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBlock { .. }));
        assert!(err.to_string().contains("footer-bootstrap"));
    }

    #[test]
    fn test_misshapen_override_is_rejected() {
        let config = GalleryConfig::from_toml_str(
            r#"
[overrides.hero-tailwind-stats]
stats = "lots"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BlockParseError {
                block: BlockKind::HeroTailwindStats,
                ..
            }
        ));
    }

    #[test]
    fn test_repeated_block_is_rejected() {
        let config = GalleryConfig::from_toml_str(
            r#"blocks = ["footer-daisyui-grid", "hero-tailwind-stats", "footer-daisyui-grid"]"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateBlock {
                block: BlockKind::FooterDaisyUiGrid
            }
        ));
        assert_eq!(
            config.blocks(),
            vec![BlockKind::FooterDaisyUiGrid, BlockKind::HeroTailwindStats]
        );
    }

    #[test]
    fn test_unknown_block_in_list_fails_parsing() {
        let result = GalleryConfig::from_toml_str(r#"blocks = ["hero-nope"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = GalleryConfig::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "title = [").unwrap();

        let err = GalleryConfig::load_from_path(&config_file).unwrap_err();

        match err {
            ConfigError::ConfigParseError { config_path, .. } => {
                assert_eq!(config_path, config_file)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = GalleryConfig {
            title: Some("Saved".to_string()),
            blocks: Some(vec![BlockKind::HeroHeadlessUiTabs]),
            ..Default::default()
        };
        config
            .set_partial(
                BlockKind::HeroHeadlessUiTabs,
                &PartialTabsHeroConfig {
                    title: Some("Ship it".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        config.save_to_path(&config_file).unwrap();
        let loaded = GalleryConfig::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
        let hero = loaded
            .partial::<PartialTabsHeroConfig>(BlockKind::HeroHeadlessUiTabs)
            .unwrap()
            .resolve_defaults();
        assert_eq!(hero.title, "Ship it");
        assert_eq!(hero.tabs.len(), 3);
    }

    #[test]
    fn test_set_empty_partial_removes_override() {
        let mut config = GalleryConfig::from_toml_str(SAMPLE).unwrap();
        config
            .set_partial(
                BlockKind::FooterDaisyUiGrid,
                &PartialGridFooterConfig::default(),
            )
            .unwrap();
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_export_path_with_env_var() {
        unsafe {
            env::set_var("TAILBLOCKS_TEST_OUT", "/tmp/tailblocks-out");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"export_path = "$TAILBLOCKS_TEST_OUT/gallery.html""#,
        )
        .unwrap();

        let config = GalleryConfig::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.export_path,
            Some(PathBuf::from("/tmp/tailblocks-out/gallery.html"))
        );

        unsafe {
            env::remove_var("TAILBLOCKS_TEST_OUT");
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = GalleryConfig::expand_path(Path::new("~/exports")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("exports"));
    }
}
