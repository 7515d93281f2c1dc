use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, trace};

use crate::error::ThemeError;
use crate::hash::content_class;
use crate::style::{Direction, RuleSet};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StyleCacheKey {
    pub theme: u64,
    pub component: &'static str,
    pub prefix: String,
    pub direction: Direction,
}

impl StyleCacheKey {
    pub fn new(theme: u64, component: &'static str, prefix: impl Into<String>) -> Self {
        Self {
            theme,
            component,
            prefix: prefix.into(),
            direction: Direction::Ltr,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

struct ScopeEntry {
    css: Arc<str>,
    refs: usize,
}

#[derive(Default)]
struct RegistryInner {
    keys: HashMap<StyleCacheKey, String>,
    scopes: HashMap<String, ScopeEntry>,
    order: Vec<String>,
}

#[derive(Clone, Default)]
pub struct StyleRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtractedStyles {
    pub css: String,
    pub scope_classes: Vec<String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(inner: &Mutex<RegistryInner>) -> MutexGuard<'_, RegistryInner> {
        // A panic inside a compute closure must not wedge the whole cache.
        inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_or_create<F>(&self, key: StyleCacheKey, compute: F) -> Result<StyleLease, ThemeError>
    where
        F: FnOnce() -> Result<RuleSet, ThemeError>,
    {
        let mut inner = Self::lock(&self.inner);
        if let Some(scope) = inner.keys.get(&key).cloned() {
            if let Some(entry) = inner.scopes.get_mut(&scope) {
                entry.refs += 1;
                trace!("style cache hit for {}/{}", key.component, key.prefix);
                return Ok(StyleLease {
                    inner: Arc::clone(&self.inner),
                    scope_class: scope,
                    css: Arc::clone(&entry.css),
                });
            }
            inner.keys.remove(&key);
        }

        // Compute before committing anything so a failure leaves no trace.
        let rules = compute()?;
        let unscoped = rules.to_css(None);
        let scope = content_class("glaze", &unscoped);
        debug!(
            "style cache miss for {}/{} -> {}",
            key.component, key.prefix, scope
        );

        let css = if let Some(entry) = inner.scopes.get_mut(&scope) {
            entry.refs += 1;
            Arc::clone(&entry.css)
        } else {
            let css: Arc<str> = rules.to_css(Some(&scope)).into();
            inner.scopes.insert(
                scope.clone(),
                ScopeEntry {
                    css: Arc::clone(&css),
                    refs: 1,
                },
            );
            inner.order.push(scope.clone());
            css
        };
        inner.keys.insert(key, scope.clone());

        Ok(StyleLease {
            inner: Arc::clone(&self.inner),
            scope_class: scope,
            css,
        })
    }

    pub fn extract(&self) -> ExtractedStyles {
        let inner = Self::lock(&self.inner);
        let mut css = String::new();
        let mut scope_classes = Vec::with_capacity(inner.order.len());
        for scope in &inner.order {
            if let Some(entry) = inner.scopes.get(scope) {
                css.push_str(&entry.css);
                scope_classes.push(scope.clone());
            }
        }
        ExtractedStyles { css, scope_classes }
    }

    pub fn contains_scope(&self, scope_class: &str) -> bool {
        Self::lock(&self.inner).scopes.contains_key(scope_class)
    }

    pub fn len(&self) -> usize {
        Self::lock(&self.inner).scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct StyleLease {
    inner: Arc<Mutex<RegistryInner>>,
    scope_class: String,
    css: Arc<str>,
}

impl StyleLease {
    pub fn scope_class(&self) -> &str {
        &self.scope_class
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

impl Clone for StyleLease {
    fn clone(&self) -> Self {
        let mut inner = StyleRegistry::lock(&self.inner);
        if let Some(entry) = inner.scopes.get_mut(&self.scope_class) {
            entry.refs += 1;
        }
        Self {
            inner: Arc::clone(&self.inner),
            scope_class: self.scope_class.clone(),
            css: Arc::clone(&self.css),
        }
    }
}

impl Drop for StyleLease {
    fn drop(&mut self) {
        let mut inner = StyleRegistry::lock(&self.inner);
        let remove = match inner.scopes.get_mut(&self.scope_class) {
            Some(entry) => {
                entry.refs -= 1;
                entry.refs == 0
            }
            None => false,
        };
        if remove {
            inner.scopes.remove(&self.scope_class);
            inner.order.retain(|scope| scope != &self.scope_class);
            inner.keys.retain(|_, scope| scope != &self.scope_class);
            debug!("evicted style scope {}", self.scope_class);
        }
    }
}

impl std::fmt::Debug for StyleLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleLease")
            .field("scope_class", &self.scope_class)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rule;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_rules(color: &str) -> RuleSet {
        RuleSet::new().rule(Rule::new(".btn").decl("color", color.to_string()))
    }

    #[test]
    fn second_lookup_with_the_same_key_skips_compute() {
        let registry = StyleRegistry::new();
        let calls = AtomicUsize::new(0);
        let key = StyleCacheKey::new(1, "button", "glz-btn");

        let first = registry
            .get_or_create(key.clone(), || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_rules("#000"))
            })
            .unwrap();
        let second = registry
            .get_or_create(key, || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_rules("#000"))
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.scope_class(), second.scope_class());
        assert_eq!(first.css(), second.css());
    }

    #[test]
    fn identical_css_from_different_keys_shares_one_scope() {
        let registry = StyleRegistry::new();
        let first = registry
            .get_or_create(StyleCacheKey::new(1, "button", "glz-btn"), || {
                Ok(sample_rules("#000"))
            })
            .unwrap();
        let second = registry
            .get_or_create(StyleCacheKey::new(2, "button", "glz-btn"), || {
                Ok(sample_rules("#000"))
            })
            .unwrap();
        assert_eq!(first.scope_class(), second.scope_class());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn direction_participates_in_the_cache_key() {
        let registry = StyleRegistry::new();
        let ltr = StyleCacheKey::new(1, "button", "glz-btn");
        let rtl = StyleCacheKey::new(1, "button", "glz-btn").direction(Direction::Rtl);
        assert_ne!(ltr, rtl);

        let calls = AtomicUsize::new(0);
        let _a = registry
            .get_or_create(ltr, || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_rules("#000"))
            })
            .unwrap();
        let _b = registry
            .get_or_create(rtl, || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_rules("#111"))
            })
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn leases_keep_the_style_alive_until_the_last_drop() {
        let registry = StyleRegistry::new();
        let key = StyleCacheKey::new(1, "button", "glz-btn");
        let first = registry
            .get_or_create(key.clone(), || Ok(sample_rules("#000")))
            .unwrap();
        let second = registry
            .get_or_create(key, || Ok(sample_rules("#000")))
            .unwrap();
        let scope = first.scope_class().to_string();

        drop(first);
        assert!(registry.contains_scope(&scope));
        drop(second);
        assert!(!registry.contains_scope(&scope));
        assert!(registry.is_empty());
    }

    #[test]
    fn clone_counts_as_another_consumer() {
        let registry = StyleRegistry::new();
        let lease = registry
            .get_or_create(StyleCacheKey::new(1, "button", "glz-btn"), || {
                Ok(sample_rules("#000"))
            })
            .unwrap();
        let scope = lease.scope_class().to_string();
        let copy = lease.clone();
        drop(lease);
        assert!(registry.contains_scope(&scope));
        drop(copy);
        assert!(!registry.contains_scope(&scope));
    }

    #[test]
    fn failed_compute_commits_nothing_and_retry_succeeds() {
        let registry = StyleRegistry::new();
        let key = StyleCacheKey::new(1, "button", "glz-btn");

        let error = registry.get_or_create(key.clone(), || {
            Err(ThemeError::invalid_dimension("fontSize", -1.0))
        });
        assert!(error.is_err());
        assert!(registry.is_empty());

        let lease = registry
            .get_or_create(key, || Ok(sample_rules("#000")))
            .unwrap();
        assert!(registry.contains_scope(lease.scope_class()));
    }

    #[test]
    fn concurrent_mounts_share_the_entry_and_unwind_cleanly() {
        let registry = StyleRegistry::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    let lease = registry
                        .get_or_create(StyleCacheKey::new(7, "button", "glz-btn"), || {
                            Ok(sample_rules("#000"))
                        })
                        .unwrap();
                    lease.scope_class().to_string()
                })
            })
            .collect();
        let scopes: Vec<String> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(scopes.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(registry.is_empty());
    }

    #[test]
    fn extraction_returns_css_in_insertion_order() {
        let registry = StyleRegistry::new();
        let _a = registry
            .get_or_create(StyleCacheKey::new(1, "button", "glz-btn"), || {
                Ok(sample_rules("#000"))
            })
            .unwrap();
        let _b = registry
            .get_or_create(StyleCacheKey::new(1, "alert", "glz-alert"), || {
                Ok(sample_rules("#111"))
            })
            .unwrap();

        let extracted = registry.extract();
        assert_eq!(extracted.scope_classes.len(), 2);
        assert_eq!(extracted.scope_classes[0], _a.scope_class());
        let first_at = extracted.css.find(_a.scope_class()).unwrap();
        let second_at = extracted.css.find(_b.scope_class()).unwrap();
        assert!(first_at < second_at);
    }
}
