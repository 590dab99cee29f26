//! Integration tests for the ElementFactory API
//!
//! These tests exercise the public factory surface end to end.

use std::thread;

use kreate::{
    Collection, Created, DetachedHost, ElementFactory, Host, KreateError, Options, OutputKind,
    Request, Scalar,
    config::{AppConfig, DefaultsConfig, FactoryConfig, Mode},
};

fn elements(created: Created) -> Vec<kreate::Element> {
    match created {
        Created::Elements(elements) => elements,
        other => panic!("expected elements, got {other:?}"),
    }
}

#[test]
fn test_factory_api_exists() {
    let _factory = ElementFactory::default();
    let _strict = ElementFactory::new(AppConfig::default()).strict();
}

#[test]
fn test_empty_request_yields_one_default_element() {
    let factory = ElementFactory::default();

    for (count, output) in [(None, None), (Some(5), Some("html")), (Some(-1), Some("array"))] {
        let created = factory
            .create(Request::Empty, count, output)
            .expect("lenient");

        let collection = created.into_collection().expect("collection output");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.to_html(), "<div></div>");
    }

    assert_eq!(kreate::create(None::<&str>, None, None).to_html(), "<div></div>");
}

#[test]
fn test_whitespace_is_passed_to_host_untouched() {
    let expressions = ["ul li", "<p>hello world</p>", " div", "a\tb"];

    let host = |expression: &str| Collection::from_fragment(format!("[{expression}]"));
    let factory = ElementFactory::default().with_host(host);
    for expression in expressions {
        let created = factory.create(expression, Some(3), Some("html")).expect("lenient");
        assert_eq!(created, Created::Collection(host.query(expression)));
    }

    let detached = ElementFactory::default();
    for expression in expressions {
        let created = detached.create(expression, None, None).expect("lenient");
        assert_eq!(created, Created::Collection(DetachedHost.query(expression)));
    }
}

#[test]
fn test_pass_through_is_not_parsed_in_strict_mode() {
    let factory = ElementFactory::default().strict();
    let created = factory.create("<b>a b</b>", None, None).expect("host handles it");
    assert_eq!(created.to_html(), "<b>a b</b>");
}

#[test]
fn test_shorthand_resolution() {
    let factory = ElementFactory::default();

    let resolved = factory
        .resolve(&"div#item.box".into(), None, None)
        .expect("lenient")
        .expect("not a pass-through");
    assert_eq!(resolved.tag_name(), "div");
    assert_eq!(resolved.element_id(), Some("item"));
    assert_eq!(resolved.css_class(), Some("box"));

    let resolved = factory
        .resolve(&".box#item".into(), None, None)
        .expect("lenient")
        .expect("not a pass-through");
    assert_eq!(resolved.tag_name(), "div");
    assert_eq!(resolved.element_id(), None);
    assert_eq!(resolved.css_class(), Some("box"));

    let resolved = factory
        .resolve(&"span".into(), None, None)
        .expect("lenient")
        .expect("not a pass-through");
    assert_eq!(resolved.tag_name(), "span");
    assert_eq!(resolved.element_id(), None);
    assert_eq!(resolved.css_class(), None);

    assert_eq!(factory.resolve(&"a b".into(), None, None).expect("lenient"), None);
}

#[test]
fn test_shorthand_id_must_lead() {
    let elements = kreate::create("section.card#main", None, Some("array"))
        .into_elements()
        .expect("array output");

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].id(), None);
    assert_eq!(elements[0].outer_html(), r#"<section class="card"></section>"#);

    let elements = kreate::create("div#a#b.c", None, Some("array"))
        .into_elements()
        .expect("array output");
    assert_eq!(elements[0].outer_html(), r#"<div id="a"></div>"#);

    assert!(
        ElementFactory::default()
            .strict()
            .create("section.card#main", None, None)
            .is_err()
    );
}

#[test]
fn test_shorthand_count_and_output() {
    let html = kreate::create("li#row.item", Some(2), Some("HTML"));
    assert_eq!(
        html,
        Created::Html(
            r#"<li class="item" id="row-1"></li><li class="item" id="row-2"></li>"#.to_string()
        )
    );

    let single = kreate::create("li#row", Some(0), None);
    assert_eq!(single.to_html(), r#"<li id="row"></li>"#);
}

#[test]
fn test_numbered_ids() {
    let options = Options::new().tag("li").id("row").length(3).output("array");
    let rows = elements(kreate::create(options, None, None));

    let ids: Vec<_> = rows.iter().map(|row| row.id()).collect();
    assert_eq!(ids, [Some("row-1"), Some("row-2"), Some("row-3")]);
    assert!(rows.iter().all(|row| row.tag() == "li"));
}

#[test]
fn test_shared_ids_without_numbering() {
    let options = Options::new()
        .tag("li")
        .id("row")
        .length(3)
        .unique_id(false)
        .output("array");
    let rows = elements(kreate::create(options, None, None));

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.id() == Some("row")));
}

#[test]
fn test_html_output_concatenates_outer_html() {
    let base = Options::new().tag("p").class("note").text("a & b").length(2);

    let html = kreate::create(base.clone().output("html"), None, None)
        .into_html()
        .expect("html output");
    let rows = elements(kreate::create(base.output("array"), None, None));

    let expected: String = rows.iter().map(|row| row.outer_html()).collect();
    assert_eq!(html, expected);
    assert_eq!(
        html,
        r#"<p class="note">a &amp; b</p><p class="note">a &amp; b</p>"#
    );
}

#[test]
fn test_attributes_are_applied_verbatim() {
    let options = Options::new()
        .length(4)
        .attr("data-x", "1")
        .attr("data-y", "2")
        .output("array");

    for element in elements(kreate::create(options, None, None)) {
        assert_eq!(element.attribute("data-x"), Some("1"));
        assert_eq!(element.attribute("data-y"), Some("2"));
    }
}

#[test]
fn test_attributes_override_id_and_class() {
    let options = Options::new()
        .id("a")
        .class("b")
        .attr("id", "c")
        .attr("CLASS", "d");

    let created = kreate::create(options, None, None);
    assert_eq!(created.to_html(), r#"<div class="d" id="c"></div>"#);
}

#[test]
fn test_content_is_raw_and_text_is_escaped() {
    let raw = kreate::create(Options::new().content("<em>hi</em>"), None, None);
    assert_eq!(raw.to_html(), "<div><em>hi</em></div>");

    let text = kreate::create(Options::new().text("<em>hi</em>"), None, None);
    assert_eq!(text.to_html(), "<div>&lt;em&gt;hi&lt;/em&gt;</div>");
}

#[test]
fn test_void_elements_have_no_end_tag() {
    let created = kreate::create(Options::new().tag("img").attr("alt", "a\"b").content("x"), None, None);
    assert_eq!(created.to_html(), r#"<img alt="a&quot;b">"#);
}

#[test]
fn test_non_numeric_length_means_one() {
    for length in [Scalar::from("3"), Scalar::from(true), Scalar::from(f64::NAN), Scalar::Unsupported] {
        let options = Options {
            length: Some(length),
            ..Options::new().output("array")
        };
        assert_eq!(elements(kreate::create(options.clone(), None, None)).len(), 1);
        // Normalizing an already normalized value changes nothing.
        let resolved = ElementFactory::default()
            .resolve(&options.into(), None, None)
            .expect("lenient")
            .expect("config");
        assert_eq!(resolved.count(), 1);
    }

    assert_eq!(elements(kreate::create(Options::new().length(3.0).output("array"), None, None)).len(), 3);
}

#[test]
fn test_fractional_length_and_start_id() {
    let rows = elements(kreate::create(
        Options::new().id("row").length(2.5).start_id(1.5).output("array"),
        None,
        None,
    ));

    let ids: Vec<_> = rows.iter().map(|row| row.id()).collect();
    assert_eq!(ids, [Some("row-1.5"), Some("row-2.5"), Some("row-3.5")]);

    let created = ElementFactory::default()
        .strict()
        .create(Options::new().id("n").length(1.5).start_id(2.0).output("html"), None, None)
        .expect("fractions are numbers");
    assert_eq!(created.to_html(), r#"<div id="n-2"></div><div id="n-3"></div>"#);
}

#[test]
fn test_unknown_output_falls_back_to_collection() {
    for output in [Scalar::from("xml"), Scalar::from(""), Scalar::from(1), Scalar::Unsupported] {
        let options = Options {
            output: Some(output),
            ..Options::new().length(2)
        };
        assert_eq!(kreate::create(options, None, None).kind(), OutputKind::Collection);
    }

    for output in ["JQUERY", "Html", "aRRay"] {
        let created = kreate::create(Options::new().output(output), None, None);
        assert_eq!(created.kind().name(), output.to_ascii_lowercase());
    }
}

#[test]
fn test_zero_length_yields_empty_collection() {
    for length in [0, -3] {
        let created = kreate::create(Options::new().length(length).output("html"), None, None);
        assert_eq!(created, Created::Collection(Collection::new()));
    }
}

#[test]
fn test_calls_share_no_state() {
    let factory = ElementFactory::default();
    let options = Options::new().tag("li").id("row").length(2).output("array");

    let first = elements(factory.create(options.clone(), None, None).expect("lenient"));
    let mut second = elements(factory.create(options, None, None).expect("lenient"));
    assert_eq!(first, second);

    second[0].set_id("changed");
    second[1].add_class("extra");
    assert_eq!(first[0].id(), Some("row-1"));
    assert!(!first[1].has_class("extra"));
}

#[test]
fn test_configured_defaults_apply() {
    let config = AppConfig::new(
        FactoryConfig::new(Mode::Lenient),
        DefaultsConfig::new("section", OutputKind::Html, true, 0),
    );
    let factory = ElementFactory::new(config);

    let created = factory.create("#s", Some(2), None).expect("lenient");
    assert_eq!(
        created,
        Created::Html(r#"<section id="s-0"></section><section id="s-1"></section>"#.to_string())
    );
}

#[test]
fn test_strict_mode_errors() {
    let factory = ElementFactory::default().strict();

    let err = factory.create("div#a#b", None, None).expect_err("repeated id");
    match err {
        KreateError::Parse { err, src } => {
            assert_eq!(src, "div#a#b");
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        factory.create("p", Some(-2), None),
        Err(KreateError::NonPositiveLength(-2))
    ));
    assert!(matches!(
        factory.create("p", None, Some("xml")),
        Err(KreateError::UnknownOutput(_))
    ));
    assert!(matches!(
        factory.create(Options::new().start_id("one"), None, None),
        Err(KreateError::InvalidStartId(_))
    ));

    let created = factory
        .create("li#row.item", Some(2), Some("array"))
        .expect("valid shorthand");
    assert_eq!(created.kind(), OutputKind::Array);
}

#[test]
fn test_strict_from_config() {
    let config: AppConfig = toml::from_str("[factory]\nmode = \"strict\"").expect("valid config");
    let factory = ElementFactory::new(config);

    assert_eq!(factory.mode(), Mode::Strict);
    assert!(factory.create(Options::new().length("x"), None, None).is_err());
}

#[test]
fn test_options_from_toml() {
    let options: Options = toml::from_str(
        r#"
        tag = "option"
        id = "opt"
        length = 2
        unique_id = false
        output = "html"

        [attr]
        value = 7
        selected = true
        "#,
    )
    .expect("valid options");

    let created = kreate::create(options, None, None);
    assert_eq!(
        created.to_html(),
        concat!(
            r#"<option id="opt" value="7" selected="true"></option>"#,
            r#"<option id="opt" value="7" selected="true"></option>"#
        )
    );
}

#[test]
fn test_factory_is_shareable_across_threads() {
    let factory = ElementFactory::default();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|index| {
                let factory = &factory;
                scope.spawn(move || {
                    factory
                        .create("span.cell", Some(index + 1), Some("array"))
                        .expect("lenient")
                })
            })
            .collect();

        for (index, handle) in handles.into_iter().enumerate() {
            let created = handle.join().expect("thread panicked");
            assert_eq!(elements(created).len(), index + 1);
        }
    });
}

#[test]
fn test_created_accessors_match_shape() {
    let html = kreate::create("p", None, Some("html"));
    assert_eq!(html.clone().into_collection(), None);
    assert_eq!(html.clone().into_elements(), None);
    assert_eq!(html.into_html().as_deref(), Some("<p></p>"));

    let collection = kreate::create("p", Some(2), None);
    assert_eq!(collection.clone().into_html(), None);
    assert_eq!(collection.into_collection().map(|c| c.len()), Some(2));
}
