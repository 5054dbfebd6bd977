use crate::commands::blocks::BlockRow;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Render block rows as an aligned table.
pub fn render_rows(rows: &[BlockRow], use_color: bool) -> String {
    let kind_width = rows.iter().map(|r| r.kind.len()).max().unwrap_or(4).max(4);
    let order_width = rows
        .iter()
        .map(|r| r.order.to_string().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header = format!(
        "{:>ow$}  {:<kw$}  {:<6}  Preview",
        "Order",
        "Kind",
        "Align",
        ow = order_width,
        kw = kind_width
    );
    if use_color {
        lines.push(format!("{}{}{}", Color::BOLD, header, Color::RESET));
    } else {
        lines.push(header);
    }
    lines.push("\u{2500}".repeat(order_width + kind_width + 24));

    for row in rows {
        let kind = format!("{:<kw$}", row.kind, kw = kind_width);
        let kind = if use_color {
            format!("{}{}{}", Color::CYAN, kind, Color::RESET)
        } else {
            kind
        };
        let align = format!("{:<6}", row.align);
        let align = if use_color {
            format!("{}{}{}", Color::DIM, align, Color::RESET)
        } else {
            align
        };
        lines.push(format!(
            "{:>ow$}  {}  {}  {}",
            row.order,
            kind,
            align,
            row.preview,
            ow = order_width
        ));
    }

    lines.join("\n")
}
