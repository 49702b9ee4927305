use super::PrintChild;

/// Renders `children` as branches hanging below the current line.
///
/// Each child is called with the indentation its own children must use.
/// Missing children are skipped; an empty rendering draws a bare `│`.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild>]) -> String {
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return String::new();
    };

    let mut out = String::new();
    for (i, child) in children[..=last].iter().enumerate() {
        let Some(child) = child else {
            continue;
        };
        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let text = child(&child_tab);

        out.push('\n');
        out.push_str(tab);
        if text.is_empty() {
            out.push('│');
            continue;
        }
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&text);
    }
    out
}

/// Renders the left (`←`) and right (`→`) subtrees of a binary node.
pub fn print_binary(tab: &str, left: &PrintChild, right: &PrintChild) -> String {
    let l = |tab: &str| format!("← {}", left(&format!("{tab}  ")));
    let r = |tab: &str| format!("→ {}", right(&format!("{tab}  ")));
    let l: &PrintChild = &l;
    let r: &PrintChild = &r;
    print_tree(tab, &[Some(l), Some(r)])
}
