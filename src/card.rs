use crate::chart::{bar_section, legend_section};
use crate::config::CardConfig;
use crate::model::CardData;
use crate::style::{STYLE, STYLE_NO_ANIMATION};
use crate::svg::{Document, Group, Rect, Text};
use crate::theme::Theme;

/// Canvas plus an empty content group translated by `(padding, padding)`.
/// The caller fills the group with chart sections and pushes it back onto
/// the document before serializing.
#[allow(clippy::too_many_arguments)]
pub fn compose(
    width: f64,
    height: f64,
    padding: f64,
    header_text: &str,
    subheader_text: &str,
    animate: bool,
    debug: bool,
    theme: &Theme,
) -> (Document, Group) {
    let style = if animate { STYLE } else { STYLE_NO_ANIMATION };
    let mut document = Document::new(width, height, style);

    document.push(
        Rect::new(0.5, 0.5, width - 1.0, height - 1.0, &theme.card_fill)
            .with_rx(4.5)
            .with_stroke(&theme.card_stroke),
    );

    let content_fill = if debug {
        &theme.content_debug_fill
    } else {
        &theme.content_fill
    };
    document.push(Rect::new(
        padding,
        padding,
        width - 2.0 * padding,
        height - 2.0 * padding,
        content_fill,
    ));

    let mut content = Group::translated(padding, padding);
    content.push(Text::classed(0.0, 13.0, header_text, "header"));
    content.push(Text::classed(0.0, 31.0, subheader_text, "subheader"));

    (document, content)
}

/// Full card assembly: compose the canvas, append the bar and legend
/// sections that have data, and return the finished document.
pub fn render_card(data: &CardData, config: &CardConfig, theme: &Theme) -> Document {
    let (mut document, mut content) = compose(
        config.width,
        config.height,
        config.padding,
        &data.header,
        &data.subheader,
        config.animate,
        config.debug,
        theme,
    );

    if !data.rows.is_empty() {
        content.push(bar_section(
            &data.rows,
            theme,
            config.bar_section_padding,
            config.bar_width,
        ));
    }
    if !data.legend.is_empty() {
        content.push(legend_section(
            &data.legend,
            theme,
            config.legend_columns,
            config.legend_section_padding,
        ));
    }

    document.push(content);
    document
}
