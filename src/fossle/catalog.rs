//! The fixed, ordered list of guessable projects.
//!
//! Puzzle selection is index arithmetic over this list, so its order must not
//! change between runs: entries are always kept sorted by name.

use crate::error::{FossleError, Result};
use once_cell::sync::Lazy;

/// Project name paired with the key its code snippet is stored under.
const BUILTIN_PROJECTS: &[(&str, &str)] = &[
    ("freeCodeCamp/freeCodeCamp", "freeCodeCamp"),
    ("vuejs/vue", "vue"),
    ("facebook/react", "react"),
    ("tensorflow/tensorflow", "tensorflow"),
    ("twbs/bootstrap", "bootstrap"),
    ("ohmyzsh/ohmyzsh", "ohmyzsh"),
    ("flutter/flutter", "flutter"),
    ("microsoft/vscode", "vscode"),
    ("torvalds/linux", "linux"),
    ("facebook/react-native", "react-native"),
    ("electron/electron", "electron"),
    ("golang/go", "go"),
    ("facebook/create-react-app", "create-react-app"),
    ("kubernetes/kubernetes", "kubernetes"),
    ("nodejs/node", "node"),
    ("vercel/next.js", "nextjs"),
    ("angular/angular", "angular"),
    ("mrdoob/three.js", "threejs"),
    ("microsoft/TypeScript", "typescript"),
    ("ant-design/ant-design", "ant-design"),
    ("puppeteer/puppeteer", "puppeteer"),
    ("mui/material-ui", "material-ui"),
    ("tensorflow/models", "tfmodels"),
    ("storybookjs/storybook", "storybook"),
    ("nvbn/thefuck", "thefuck"),
    ("rust-lang/rust", "rust"),
    ("django/django", "django"),
    ("moby/moby", "moby"),
    ("bitcoin/bitcoin", "bitcoin"),
    ("genymobile/scrcpy", "scrcpy"),
    ("webpack/webpack", "webpack"),
    ("opencv/opencv", "opencv"),
    ("apple/swift", "swift"),
    ("elastic/elasticsearch", "elasticsearch"),
    ("hakimel/reveal.js", "revealjs"),
    ("netdata/netdata", "netdata"),
    ("pallets/flask", "flask"),
    ("reduxjs/redux", "redux"),
    ("gohugoio/hugo", "hugo"),
    ("atom/atom", "atom"),
    ("chartjs/Chart.js", "chartjs"),
    ("expressjs/express", "expressjs"),
    ("gin-gonic/gin", "gin"),
    ("jquery/jquery", "jquery"),
    ("socketio/socket.io", "socketio"),
    ("adam-p/markdown-here", "markdown-here"),
    ("keras-team/keras", "keras"),
    ("pytorch/pytorch", "pytorch"),
    ("shadowsocks/shadowsocks-windows", "shadowsocks-windows"),
    ("fatedier/frp", "frp"),
    ("redis/redis", "redis"),
    ("gatsbyjs/gatsby", "gatsbyjs"),
    ("ansible/ansible", "ansible"),
    ("elemeFE/element", "ElemeFE"),
    ("neovim/neovim", "neovim"),
    ("rails/rails", "rails"),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let items = BUILTIN_PROJECTS
        .iter()
        .map(|(name, snippet)| CatalogItem::new(*name, *snippet))
        .collect();
    Catalog::sorted(items)
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogItem {
    /// Display and guess identifier, e.g. `rust-lang/rust`.
    pub name: String,
    /// Key the content provider uses to find this project's snippet.
    pub snippet: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            snippet: snippet.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from arbitrary items, sorting them by name.
    /// Fails on an empty list or a repeated name.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(FossleError::Catalog("catalog is empty".to_string()));
        }
        let catalog = Self::sorted(items);
        if let Some(pair) = catalog.items.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(FossleError::Catalog(format!(
                "duplicate project: {}",
                pair[0].name
            )));
        }
        Ok(catalog)
    }

    /// The projects shipped with fossle.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn sorted(mut items: Vec<CatalogItem>) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.position(name).map(|i| &self.items[i])
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.items
            .binary_search_by(|item| item.name.as_str().cmp(name))
            .ok()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_sorted_and_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 56);

        let names = catalog.names();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);

        // The builtin list passes the same validation as user catalogs.
        assert!(Catalog::new(catalog.items.clone()).is_ok());
    }

    #[test]
    fn test_builtin_order_is_byte_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(0).unwrap().name, "adam-p/markdown-here");
        assert_eq!(catalog.find("rust-lang/rust").unwrap().snippet, "rust");
        // Upper case sorts before lower case.
        let chart = catalog.position("chartjs/Chart.js").unwrap();
        assert_eq!(catalog.get(chart).unwrap().snippet, "chartjs");
    }

    #[test]
    fn test_new_sorts_items() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("b/b", "b"),
            CatalogItem::new("a/a", "a"),
        ])
        .unwrap();
        assert_eq!(catalog.names(), vec!["a/a", "b/b"]);
        assert_eq!(catalog.position("b/b"), Some(1));
        assert!(!catalog.contains("c/c"));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let res = Catalog::new(vec![
            CatalogItem::new("a/a", "a"),
            CatalogItem::new("a/a", "other"),
        ]);
        assert!(matches!(res, Err(FossleError::Catalog(_))));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Catalog::new(Vec::new()).is_err());
    }
}
