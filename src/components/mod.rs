use crate::alias::AliasToken;
use crate::error::ThemeError;
use crate::style::{Direction, RuleSet};
use crate::theme::ComponentOverrides;

pub mod button;

pub use button::{ButtonOverrides, ButtonStyle, ButtonToken};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleOrigin {
    pub prefix: String,
    pub direction: Direction,
}

impl StyleOrigin {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            direction: Direction::Ltr,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

pub trait ComponentStyle {
    const NAME: &'static str;
    type Token;

    fn component_token(
        alias: &AliasToken,
        overrides: &ComponentOverrides,
    ) -> Result<Self::Token, ThemeError>;

    fn rules(token: &Self::Token, origin: &StyleOrigin) -> RuleSet;
}
