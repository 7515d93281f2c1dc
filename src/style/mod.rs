use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Ltr
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Declarations {
    entries: BTreeMap<String, String>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(property.into(), value.into());
        self
    }

    pub fn extend(mut self, other: Self) -> Self {
        for (property, value) in other.entries {
            self.entries.insert(property, value);
        }
        self
    }

    pub fn read(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rule {
    selector: String,
    declarations: Declarations,
    children: Vec<Rule>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Declarations::new(),
            children: Vec::new(),
        }
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations = self.declarations.decl(property, value);
        self
    }

    pub fn merge(mut self, declarations: Declarations) -> Self {
        self.declarations = self.declarations.extend(declarations);
        self
    }

    pub fn child(mut self, rule: Rule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    pub fn children(&self) -> &[Rule] {
        &self.children
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn extend(mut self, other: RuleSet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_css(&self, scope: Option<&str>) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            write_rule(&mut out, rule, None, scope, 0);
        }
        out
    }
}

fn write_rule(out: &mut String, rule: &Rule, parent: Option<&str>, scope: Option<&str>, depth: usize) {
    if rule.selector.starts_with('@') {
        let pad = "  ".repeat(depth);
        out.push_str(&pad);
        out.push_str(&rule.selector);
        out.push_str(" {\n");
        for child in &rule.children {
            write_rule(out, child, parent, scope, depth + 1);
        }
        out.push_str(&pad);
        out.push_str("}\n");
        return;
    }

    let resolved = resolve_selector(&rule.selector, parent);
    if !rule.declarations.is_empty() {
        let printed = match scope {
            Some(scope) => scope_selector(&resolved, scope),
            None => resolved.clone(),
        };
        let pad = "  ".repeat(depth);
        out.push_str(&pad);
        out.push_str(&printed);
        out.push_str(" {\n");
        for (property, value) in rule.declarations.iter() {
            out.push_str(&pad);
            out.push_str("  ");
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str(&pad);
        out.push_str("}\n");
    }
    for child in &rule.children {
        write_rule(out, child, Some(&resolved), scope, depth);
    }
}

fn resolve_selector(selector: &str, parent: Option<&str>) -> String {
    match parent {
        Some(parent) => {
            if selector.contains('&') {
                selector.replace('&', parent)
            } else {
                format!("{parent} {selector}")
            }
        }
        None => selector.to_string(),
    }
}

// The scope class lands on the styled element itself, right after the first
// compound selector of every comma-separated part.
fn scope_selector(selector: &str, scope: &str) -> String {
    selector
        .split(',')
        .map(|part| {
            let part = part.trim();
            let boundary = part
                .char_indices()
                .skip(1)
                .find(|&(_, ch)| matches!(ch, ':' | ' ' | '>' | '+' | '~' | '['))
                .map(|(index, _)| index)
                .unwrap_or(part.len());
            format!("{}.{scope}{}", &part[..boundary], &part[boundary..])
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn px(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", num(value))
    }
}

pub fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.4}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_rules_with_sorted_declarations() {
        let set = RuleSet::new().rule(
            Rule::new(".btn")
                .decl("color", "#000")
                .decl("background-color", "#fff"),
        );
        assert_eq!(
            set.to_css(None),
            ".btn {\n  background-color: #fff;\n  color: #000;\n}\n"
        );
    }

    #[test]
    fn nested_selectors_substitute_the_parent() {
        let set = RuleSet::new().rule(
            Rule::new(".btn")
                .decl("color", "#000")
                .child(Rule::new("&:hover").decl("color", "#111"))
                .child(Rule::new("> span").decl("display", "inline-block")),
        );
        let css = set.to_css(None);
        assert!(css.contains(".btn:hover {"));
        assert!(css.contains(".btn > span {"));
    }

    #[test]
    fn scope_class_is_attached_to_the_styled_element() {
        let set = RuleSet::new().rule(
            Rule::new(".btn")
                .decl("color", "#000")
                .child(Rule::new("&:hover").decl("color", "#111")),
        );
        let css = set.to_css(Some("glaze-abc"));
        assert!(css.contains(".btn.glaze-abc {"));
        assert!(css.contains(".btn.glaze-abc:hover {"));
    }

    #[test]
    fn scope_injection_stops_at_the_first_combinator() {
        assert_eq!(
            scope_selector(".btn:active", "glaze-abc"),
            ".btn.glaze-abc:active"
        );
        assert_eq!(
            scope_selector(".btn > span, .btn + .btn", "glaze-abc"),
            ".btn.glaze-abc > span, .btn.glaze-abc + .btn"
        );
    }

    #[test]
    fn media_rules_wrap_their_children() {
        let set = RuleSet::new().rule(
            Rule::new("@media (max-width: 575px)")
                .child(Rule::new(".btn").decl("width", "100%")),
        );
        let css = set.to_css(Some("glaze-abc"));
        assert!(css.starts_with("@media (max-width: 575px) {\n"));
        assert!(css.contains("  .btn.glaze-abc {"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn px_and_num_trim_redundant_fractions() {
        assert_eq!(px(0.0), "0");
        assert_eq!(px(15.0), "15px");
        assert_eq!(px(1.5), "1.5px");
        assert_eq!(num(1.5714285714), "1.5714");
    }
}
