//! Generators for the standard HTML elements.
//!
//! ```rust
//! use elgen::{tags, text, VirtualDocument};
//!
//! let document = VirtualDocument::new();
//! let heading = tags::h1(&document).as_tag(text!("Welcome")).unwrap();
//! assert_eq!(heading.tag(), "h1");
//! ```

use crate::{Document, ElementGenerator};

macro_rules! builder_constructors {
    (
        $(
            $(#[$attr:meta])*
            $name:ident;
        )*
    ) => {
        /// Every tag name with a generator in this module.
        pub const KNOWN_TAGS: &[&str] = &[$(stringify!($name)),*];

        $(
            $(#[$attr])*
            #[doc = concat!("Generator for [`<", stringify!($name), ">`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/", stringify!($name), ") elements.")]
            pub fn $name<D: Document + Clone>(document: D) -> ElementGenerator<D> {
                ElementGenerator::new(document, stringify!($name))
            }
        )*
    };
}

// Organized in the same order as
// https://developer.mozilla.org/en-US/docs/Web/HTML/Element
//
// Obsolete and deprecated elements are left out.
builder_constructors! {
    // Document metadata
    base;
    head;
    link;
    meta;
    style;
    title;

    // Sectioning root
    body;

    // Content sectioning
    address;
    article;
    aside;
    footer;
    header;
    h1;
    h2;
    h3;
    h4;
    h5;
    h6;
    hgroup;
    main;
    nav;
    section;
    search;

    // Text content
    blockquote;
    dd;
    div;
    dl;
    dt;
    figcaption;
    figure;
    hr;
    li;
    menu;
    ol;
    p;
    pre;
    ul;

    // Inline text semantics
    a;
    abbr;
    b;
    bdi;
    bdo;
    br;
    cite;
    code;
    data;
    dfn;
    em;
    i;
    kbd;
    mark;
    q;
    rp;
    rt;
    ruby;
    s;
    samp;
    small;
    span;
    strong;
    sub;
    sup;
    time;
    u;
    var;
    wbr;

    // Image and multimedia
    area;
    audio;
    img;
    map;
    track;
    video;

    // Embedded content
    embed;
    iframe;
    object;
    picture;
    portal;
    source;

    // Scripting
    canvas;
    noscript;
    script;

    // Demarcating edits
    del;
    ins;

    // Table content
    caption;
    col;
    colgroup;
    table;
    tbody;
    td;
    tfoot;
    th;
    thead;
    tr;

    // Forms
    button;
    datalist;
    fieldset;
    form;
    input;
    label;
    legend;
    meter;
    optgroup;
    option;
    output;
    progress;
    select;
    textarea;

    // Interactive elements
    details;
    dialog;
    summary;

    // Web components
    slot;
    template;
}
