use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::alias::{AliasOverrides, AliasToken, format_token};
use crate::components::button::ButtonOverrides;
use crate::derive::{Algorithm, derive_chain};
use crate::error::ThemeError;
use crate::hash::fnv1a64;
use crate::tokens::{SeedOverrides, SeedToken};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComponentOverrides {
    #[serde(rename = "Button")]
    pub button: ButtonOverrides,
}

impl ComponentOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(mut self, overrides: ButtonOverrides) -> Self {
        self.button = overrides;
        self
    }
}

fn algorithm_list<'de, D>(deserializer: D) -> Result<Vec<Algorithm>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Algorithm),
        Many(Vec<Algorithm>),
    }
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(algorithm) => vec![algorithm],
        OneOrMany::Many(algorithms) => algorithms,
    })
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub token: SeedOverrides,
    pub alias: AliasOverrides,
    pub components: ComponentOverrides,
    #[serde(deserialize_with = "algorithm_list")]
    pub algorithm: Vec<Algorithm>,
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, overrides: SeedOverrides) -> Self {
        self.token = overrides;
        self
    }

    pub fn alias(mut self, overrides: AliasOverrides) -> Self {
        self.alias = overrides;
        self
    }

    pub fn components(mut self, overrides: ComponentOverrides) -> Self {
        self.components = overrides;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm.push(algorithm);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    seed: SeedToken,
    algorithms: Vec<Algorithm>,
    components: ComponentOverrides,
    alias: Arc<AliasToken>,
    fingerprint: u64,
    hash_id: String,
}

impl Theme {
    pub fn new(config: ThemeConfig) -> Result<Self, ThemeError> {
        let seed = SeedToken::default().merged(&config.token);
        seed.validate()?;
        config.alias.validate()?;

        let algorithms = if config.algorithm.is_empty() {
            vec![Algorithm::Default]
        } else {
            config.algorithm.clone()
        };
        let map = derive_chain(&seed, &algorithms)?;
        let alias = format_token(&map, &config.alias);

        // Debug output of these plain-data structs is stable, which makes it
        // usable as the content fingerprint for cache identity.
        let fingerprint = fnv1a64(
            format!(
                "{seed:?}|{algorithms:?}|{:?}|{:?}",
                config.alias, config.components
            )
            .as_bytes(),
        );
        let hash_id = format!("glaze-{fingerprint:016x}");
        debug!("resolved theme {hash_id} via {algorithms:?}");

        Ok(Self {
            seed,
            algorithms,
            components: config.components,
            alias: Arc::new(alias),
            fingerprint,
            hash_id,
        })
    }

    pub fn seed(&self) -> &SeedToken {
        &self.seed
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn components(&self) -> &ComponentOverrides {
        &self.components
    }

    pub fn alias_token(&self) -> &Arc<AliasToken> {
        &self.alias
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn hash_id(&self) -> &str {
        &self.hash_id
    }
}
