use std::sync::Arc;

use crate::alias::AliasToken;
use crate::components::{ComponentStyle, StyleOrigin};
use crate::error::ThemeError;
use crate::registry::{ExtractedStyles, StyleCacheKey, StyleLease, StyleRegistry};
use crate::style::Direction;
use crate::theme::{Theme, ThemeConfig};

#[derive(Clone)]
pub struct ThemeProvider {
    theme: Arc<Theme>,
    registry: Arc<StyleRegistry>,
}

#[derive(Clone, Debug)]
pub struct TokenHandle {
    pub theme: Arc<Theme>,
    pub token: Arc<AliasToken>,
    pub hash_id: String,
}

impl ThemeProvider {
    pub fn new(config: ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self::with_theme(Theme::new(config)?))
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Arc::new(theme),
            registry: Arc::new(StyleRegistry::new()),
        }
    }

    // A theme change produces a new provider value; the registry is shared so
    // styles from the previous theme survive until their last lease drops.
    pub fn swap_theme(&self, config: ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self {
            theme: Arc::new(Theme::new(config)?),
            registry: Arc::clone(&self.registry),
        })
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn registry(&self) -> &Arc<StyleRegistry> {
        &self.registry
    }

    pub fn token(&self) -> TokenHandle {
        TokenHandle {
            theme: Arc::clone(&self.theme),
            token: Arc::clone(self.theme.alias_token()),
            hash_id: self.theme.hash_id().to_string(),
        }
    }

    pub fn style<C: ComponentStyle>(&self, prefix: &str) -> Result<StyleLease, ThemeError> {
        self.style_with::<C>(prefix, Direction::Ltr)
    }

    pub fn style_with<C: ComponentStyle>(
        &self,
        prefix: &str,
        direction: Direction,
    ) -> Result<StyleLease, ThemeError> {
        let key = StyleCacheKey::new(self.theme.fingerprint(), C::NAME, prefix).direction(direction);
        let theme = Arc::clone(&self.theme);
        let origin = StyleOrigin::new(prefix).direction(direction);
        self.registry.get_or_create(key, move || {
            let token = C::component_token(theme.alias_token(), theme.components())?;
            Ok(C::rules(&token, &origin))
        })
    }

    pub fn extract(&self) -> ExtractedStyles {
        self.registry.extract()
    }
}
