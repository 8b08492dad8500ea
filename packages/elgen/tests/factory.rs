use elgen::prelude::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;

/// A document that refuses to assign `readOnly` and records every assignment it accepts.
#[derive(Clone, Default)]
struct PickyDocument {
    inner: VirtualDocument,
    assigned: std::rc::Rc<RefCell<Vec<String>>>,
}

impl Document for PickyDocument {
    type Element = VirtualElement;

    fn create_element(&self, tag: &str) -> Result<VirtualElement> {
        self.inner.create_element(tag)
    }

    fn set_property(&self, element: &mut VirtualElement, name: &str, value: &Value) -> Result<()> {
        if name == "readOnly" {
            return Err(Error::InvalidProperty {
                name: name.to_string(),
                reason: "property is read-only".to_string(),
            });
        }
        self.assigned.borrow_mut().push(name.to_string());
        self.inner.set_property(element, name, value)
    }

    fn set_text_content(&self, element: &mut VirtualElement, text: &str) {
        self.inner.set_text_content(element, text)
    }
}

#[test]
fn hello_world() {
    let document = VirtualDocument::new();
    let el = make_element_factory(&document, "div")
        .props(None)
        .build(TaggedText::new(["Hello, ", "!"], ["World"]))
        .unwrap();

    assert_eq!(el.tag(), "div");
    assert_eq!(el.text_content(), "Hello, World!");
    assert_eq!(el.properties().count(), 0);
}

#[test]
fn props_and_numbers() {
    let document = VirtualDocument::new();
    let el = make_element_factory(&document, "span")
        .props(props! { "className" => "big" })
        .build(TaggedText::new(["Score: ", ""], [42]))
        .unwrap();

    assert_eq!(el.tag(), "span");
    assert_eq!(el.property("className"), Some(&Value::from("big")));
    assert_eq!(el.text_content(), "Score: 42");
}

#[test]
fn single_literal_without_values() {
    let el = make_element_factory(VirtualDocument::new(), "p")
        .build(TaggedText::new(["static"], Vec::<Value>::new()))
        .unwrap();
    assert_eq!(el.text_content(), "static");
}

#[test]
fn missing_values_are_rejected() {
    let document = VirtualDocument::new();
    let result = make_element_factory(&document, "p")
        .build(TaggedText::new(["a", "b"], Vec::<Value>::new()));

    assert_eq!(
        result,
        Err(Error::MismatchedInterpolation {
            strings: 2,
            values: 0
        })
    );
    // the element is created before its text is assembled, then dropped
    assert_eq!(document.created(), 1);
}

#[test]
fn element_type_is_checked_before_the_text() {
    let result = make_element_factory(VirtualDocument::new(), "not a tag")
        .build(TaggedText::new(["a", "b"], Vec::<Value>::new()));
    assert!(matches!(result, Err(Error::InvalidElementType { .. })));
}

#[test]
fn surplus_values_are_rejected() {
    let result = make_element_factory(VirtualDocument::new(), "p")
        .build(TaggedText::new(["a"], ["b"]));
    assert_eq!(
        result,
        Err(Error::MismatchedInterpolation {
            strings: 1,
            values: 1
        })
    );
}

#[test]
fn empty_text_is_rejected() {
    let result = make_element_factory(VirtualDocument::new(), "p").build(TaggedText::default());
    assert_eq!(result, Err(Error::EmptyTaggedText));
}

#[test]
fn lenient_policy_matches_shift_semantics() {
    let factory =
        make_element_factory(VirtualDocument::new(), "p").policy(InterpolationPolicy::Lenient);

    let padded = factory
        .build(TaggedText::new(["a", "b"], Vec::<Value>::new()))
        .unwrap();
    assert_eq!(padded.text_content(), "aundefinedb");

    let dropped = factory.build(TaggedText::new(["a", "b"], [1, 2, 3])).unwrap();
    assert_eq!(dropped.text_content(), "a1b");
}

#[test]
fn colliding_properties_keep_the_last_value() {
    let props = PropertyMap::new()
        .with("title", "first")
        .with("hidden", true)
        .with("title", "second");

    let el = make_element_factory(VirtualDocument::new(), "div")
        .props(props)
        .build("body")
        .unwrap();

    assert_eq!(el.property("title"), Some(&Value::from("second")));
    assert_eq!(el.property("hidden"), Some(&Value::Bool(true)));
}

#[test]
fn every_property_is_applied() {
    let props: PropertyMap = [("id", Value::from("main")), ("tabIndex", Value::from(3))]
        .into_iter()
        .collect();

    let el = make_element_factory(VirtualDocument::new(), "section")
        .props(props.clone())
        .build("")
        .unwrap();

    for (name, value) in props.iter() {
        assert_eq!(el.property(name), Some(value));
    }
}

#[test]
fn interpolation_is_raw() {
    let el = make_element_factory(VirtualDocument::new(), "div")
        .build(TaggedText::new(["", ""], ["<script>alert(1)</script>"]))
        .unwrap();
    assert_eq!(el.text_content(), "<script>alert(1)</script>");
}

#[test]
fn text_is_concatenated_in_order() {
    let strings = ["s0", "s1", "s2", "s3"];
    let values = [Value::from("v0"), Value::from(1), Value::from(2.5)];
    let el = make_element_factory(VirtualDocument::new(), "div")
        .build(TaggedText::new(strings, values))
        .unwrap();
    assert_eq!(el.text_content(), "s0v0s11s22.5s3");
}

#[test]
fn pending_elements_build_fresh_elements() {
    let document = VirtualDocument::new();
    let pending = make_element_factory(&document, "li").props(props! { "className" => "item" });

    let first = pending.build("one").unwrap();
    let second = pending.build("one").unwrap();

    assert_ne!(first.id(), second.id());
    assert!(first.same_as(&second));
    assert_eq!(document.created(), 2);
}

#[test]
fn pending_elements_as_closures() {
    let build = make_element_factory(VirtualDocument::new(), "em")
        .props(None)
        .into_fn();
    let el = build(TaggedText::literal("closure")).unwrap();
    assert_eq!(el.text_content(), "closure");
}

#[test]
fn invalid_element_types_come_from_the_document() {
    let result = make_element_factory(VirtualDocument::new(), "not a tag").build("x");
    assert!(matches!(
        result,
        Err(Error::InvalidElementType { ref tag, .. }) if tag == "not a tag"
    ));

    let mut cfg = DocumentConfig::default();
    cfg.strict_tags(true);
    let strict = VirtualDocument::with_config(cfg);
    assert!(make_element_factory(&strict, "marquee").build("x").is_err());
    assert!(make_element_factory(&strict, "article").build("x").is_ok());
}

#[test]
fn errors_render_readably() {
    let err = Error::MismatchedInterpolation {
        strings: 2,
        values: 0,
    };
    assert_eq!(
        err.to_string(),
        "tagged text has 2 literal segments but 0 interpolated values (expected 1)"
    );
}

#[test]
fn rejected_properties_stop_construction() {
    let document = PickyDocument::default();
    let props = props! { "id" => "first", "readOnly" => true, "title" => "never" };

    let result = make_element_factory(document.clone(), "input")
        .props(props)
        .build("x");

    assert_eq!(
        result,
        Err(Error::InvalidProperty {
            name: "readOnly".to_string(),
            reason: "property is read-only".to_string(),
        })
    );
    assert_eq!(*document.assigned.borrow(), ["id"]);
}
