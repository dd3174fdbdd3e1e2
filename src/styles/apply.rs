use crate::debug_message;
use crate::styles::registry::{default_registry, Style, StyleRegistry};
use crate::utils::{Error, Result};

/// A map layer owned by a renderer that can take a style from the catalogue.
///
/// `style` is `None` when the requested name isn't in the catalogue; what
/// that means is up to the implementation.
pub trait StyleTarget {
    fn apply_style(&mut self, style: Option<&Style>) -> Result<()>;
}

/// Looks up `layer_name` and hands the result, found or not, to `layer`.
pub fn apply_layer_style<T: StyleTarget + ?Sized>(registry: &StyleRegistry, layer: &mut T, layer_name: &str) -> Result<()> {
    let style = registry.get(layer_name);
    if style.is_none() {
        debug_message!("no style named {:?}", layer_name);
    }
    layer.apply_style(style)
}

/// As [`apply_layer_style`], but an unknown name is an error and `layer` is
/// left alone.
pub fn apply_layer_style_checked<T: StyleTarget + ?Sized>(
    registry: &StyleRegistry,
    layer: &mut T,
    layer_name: &str,
) -> Result<()> {
    match registry.get(layer_name) {
        Some(style) => layer.apply_style(Some(style)),
        None => Err(Error::StyleNotFound(String::from(layer_name))),
    }
}

/// [`apply_layer_style`] against the built in catalogue.
pub fn apply_default_layer_style<T: StyleTarget + ?Sized>(layer: &mut T, layer_name: &str) -> Result<()> {
    apply_layer_style(default_registry(), layer, layer_name)
}

/// In-memory layer handle: keeps a copy of the last style it was given.
#[derive(Debug, Clone, Default)]
pub struct StyledLayer {
    pub name: String,
    pub style: Option<Style>,
    pub applied: usize,
}

impl StyledLayer {
    pub fn new(name: &str) -> StyledLayer {
        StyledLayer {
            name: String::from(name),
            style: None,
            applied: 0,
        }
    }
}

impl StyleTarget for StyledLayer {
    fn apply_style(&mut self, style: Option<&Style>) -> Result<()> {
        self.style = style.cloned();
        self.applied += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::feature::FeatureStyle;

    struct Recorder {
        calls: Vec<Option<Style>>,
    }

    impl StyleTarget for Recorder {
        fn apply_style(&mut self, style: Option<&Style>) -> Result<()> {
            self.calls.push(style.cloned());
            Ok(())
        }
    }

    struct Refuses;

    impl StyleTarget for Refuses {
        fn apply_style(&mut self, style: Option<&Style>) -> Result<()> {
            match style {
                Some(_) => Ok(()),
                None => Err(Error::StyleNotFound(String::from("refused"))),
            }
        }
    }

    fn registry() -> StyleRegistry {
        let mut reg = StyleRegistry::new();
        reg.insert("Plain", Style::Feature(FeatureStyle::default()));
        reg
    }

    #[test]
    fn test_every_name_applied_once() {
        let reg = default_registry();
        for name in reg.names() {
            let mut rec = Recorder { calls: Vec::new() };
            apply_layer_style(reg, &mut rec, name).unwrap();
            assert_eq!(rec.calls.len(), 1);
            assert_eq!(rec.calls[0].as_ref(), reg.get(name));
        }
    }

    #[test]
    fn test_unknown_name_passes_none() {
        let mut rec = Recorder { calls: Vec::new() };
        apply_layer_style(&registry(), &mut rec, "Missing").unwrap();
        assert_eq!(rec.calls, vec![None]);
    }

    #[test]
    fn test_target_error_propagates() {
        let reg = registry();
        assert!(apply_layer_style(&reg, &mut Refuses, "Plain").is_ok());
        assert!(apply_layer_style(&reg, &mut Refuses, "Missing").is_err());
    }

    #[test]
    fn test_checked() {
        let mut rec = Recorder { calls: Vec::new() };
        match apply_layer_style_checked(&registry(), &mut rec, "Missing") {
            Err(Error::StyleNotFound(n)) => assert_eq!(n, "Missing"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(rec.calls.is_empty());

        apply_layer_style_checked(&registry(), &mut rec, "Plain").unwrap();
        assert_eq!(rec.calls.len(), 1);
    }

    #[test]
    fn test_styled_layer() {
        let mut layer = StyledLayer::new("base");
        apply_default_layer_style(&mut layer, "Environment Base").unwrap();
        assert_eq!(layer.applied, 1);
        assert_eq!(layer.style.as_ref(), default_registry().get("Environment Base"));

        apply_default_layer_style(&mut layer, "No Such Style").unwrap();
        assert_eq!(layer.applied, 2);
        assert!(layer.style.is_none());
    }

    #[test]
    fn test_trait_object() {
        let mut layer = StyledLayer::new("dyn");
        let target: &mut dyn StyleTarget = &mut layer;
        apply_layer_style(&registry(), target, "Plain").unwrap();
        assert_eq!(layer.applied, 1);
    }
}
