//! Turning a node tree into a [`TextArea`].
//!
//! Composition is bottom-up: every node composes its children with the style
//! it inherited merged with its own, then joins the results. The style is
//! passed down explicitly; no node is ever modified.

use tracing::trace;

use crate::area::{hjoin, hpad, vjoin, wrap_with, TextArea};
use crate::error::{LayoutError, Result};
use crate::layout::{Document, Node, Paragraph, Row, Table, TextNode, VBox};
use crate::style::{keys, Style};

/// Cell text of the rule row inserted under a table header.
pub const HEADER_RULE: &str = "---";

pub trait Compose {
    /// Renders `self` under `inherited`, which `self`'s own style overrides.
    fn compose(&self, inherited: &Style) -> Result<TextArea>;
}

/// Composes `node` starting from `style`, or from an empty style.
pub fn compose<N: Compose + ?Sized>(node: &N, style: Option<&Style>) -> Result<TextArea> {
    match style {
        Some(style) => node.compose(style),
        None => node.compose(&Style::default()),
    }
}

/// [`compose`], with the lines joined by `\n`.
pub fn to_string<N: Compose + ?Sized>(node: &N, style: Option<&Style>) -> Result<String> {
    Ok(compose(node, style)?.to_string())
}

impl Compose for Node {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let area = match self {
            Node::Document(n) => n.compose(inherited),
            Node::Paragraph(n) => n.compose(inherited),
            Node::Table(n) => n.compose(inherited),
            Node::VBox(n) => n.compose(inherited),
            Node::Text(n) => n.compose(inherited),
            // Rows only exist to feed table columns.
            Node::Row(_) => Err(LayoutError::UnknownVariant { kind: self.kind() }),
        }?;

        trace!(
            kind = self.kind(),
            width = ?area.width().ok(),
            height = area.height(),
            "composed node"
        );
        Ok(area)
    }
}

impl Compose for TextNode {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let style = Style::merge(inherited, &self.style);
        wrap_with(&self.text, style.wrap_options()?)
    }
}

impl Compose for Paragraph {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let style = Style::merge(inherited, &self.style);
        self.text.compose(&style)
    }
}

impl Compose for Document {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let style = Style::merge(inherited, &self.style);
        let mut areas = Vec::with_capacity(self.items.len() + 1);
        if style.flag(keys::SHOW_TITLE)? {
            areas.push(self.title.compose(&style)?);
        }
        for item in &self.items {
            areas.push(item.compose(&style)?);
        }
        let sep = style.item_separator()?;
        vjoin(areas, sep.as_ref())
    }
}

impl Compose for VBox {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let style = Style::merge(inherited, &self.style);
        if self.items.is_empty() {
            return Err(LayoutError::StructuralMismatch(
                "vbox has no items to stack".to_string(),
            ));
        }

        let areas = self
            .items
            .iter()
            .map(|item| item.compose(&style))
            .collect::<Result<Vec<_>>>()?;

        let mut max_width = 0;
        for area in &areas {
            max_width = max_width.max(area.width()?);
        }

        let padded = areas
            .into_iter()
            .map(|area| hpad(area, max_width))
            .collect::<Result<Vec<_>>>()?;
        vjoin(padded, None)
    }
}

impl Compose for Table {
    fn compose(&self, inherited: &Style) -> Result<TextArea> {
        let style = Style::merge(inherited, &self.style);
        let columns = self
            .columns()?
            .iter()
            .map(|column| column.compose(&style))
            .collect::<Result<Vec<_>>>()?;
        let grid = hjoin(columns, &style.column_separator()?)?;

        if style.flag(keys::SHOW_TITLE)? {
            vjoin(vec![self.title.compose(&style)?, grid], None)
        } else {
            Ok(grid)
        }
    }
}

impl Table {
    /// Splits the rows into one [`VBox`] per column, header and rule first.
    ///
    /// Cells move over untouched; a row's own style is not consulted.
    fn columns(&self) -> Result<Vec<VBox>> {
        let count = self.column_count().ok_or_else(|| {
            LayoutError::StructuralMismatch("table has no rows to take a column count from".to_string())
        })?;
        if count == 0 {
            return Err(LayoutError::StructuralMismatch(
                "table rows have no cells".to_string(),
            ));
        }

        if let Some(header) = &self.header_row {
            check_row_len(header, count, "header row")?;
        }
        for (i, row) in self.rows.iter().enumerate() {
            check_row_len(row, count, &format!("row {i}"))?;
        }

        let rule = Row {
            items: vec![TextNode::from(HEADER_RULE); count],
            style: Style::default(),
        };
        let header = self.header_row.iter().flat_map(|header| [header, &rule]);

        let mut columns = vec![VBox::default(); count];
        for row in header.chain(&self.rows) {
            for (column, cell) in columns.iter_mut().zip(row.iter()) {
                column.push(cell.clone());
            }
        }
        Ok(columns)
    }
}

fn check_row_len(row: &Row, expected: usize, what: &str) -> Result<()> {
    if row.len() == expected {
        return Ok(());
    }
    Err(LayoutError::StructuralMismatch(format!(
        "{what} has {} cells, expected {expected}",
        row.len()
    )))
}
