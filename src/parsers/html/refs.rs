/// Attributes that may hold a cross-reference, per element name
///
/// Fixed domain knowledge: which markup attributes point at other resources.
/// Elements not listed here carry no rewritable references.
pub fn reference_attributes(element_name: &str) -> &'static [&'static str] {
    match element_name {
        "a" => &["href"],
        "applet" => &["codebase"],
        "area" => &["href"],
        "audio" => &["src"],
        "blockquote" => &["cite"],
        "body" => &["background"],
        "button" => &["formaction"],
        "command" => &["icon"],
        "del" => &["cite"],
        "embed" => &["src"],
        "form" => &["action"],
        "frame" => &["longdesc", "src"],
        "head" => &["profile"],
        "html" => &["manifest"],
        "iframe" => &["longdesc", "src"],
        "img" => &["longdesc", "src", "usemap"],
        "input" => &["formaction", "src", "usemap"],
        "ins" => &["cite"],
        "link" => &["href"],
        "object" => &["classid", "codebase", "data", "usemap"],
        "q" => &["cite"],
        "script" => &["src"],
        "source" => &["src"],
        "track" => &["src"],
        "video" => &["poster", "src"],
        _ => &[],
    }
}
