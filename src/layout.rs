use core::ops::{Index, IndexMut};

use crate::style::Style;

/// One node of a document tree.
///
/// The tree must not contain cycles; composition walks `items` and `rows`
/// without keeping track of where it has been.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document(Document),
    Paragraph(Paragraph),
    Table(Table),
    Row(Row),
    /// One column of a table: children stacked and padded to a common width.
    ///
    /// ```text
    ///  ┌──────┐
    ///  │FIRST │ ← padded
    ///  │---   │
    ///  │foo   │
    ///  │this  │
    ///  └──────┘
    /// ```
    VBox(VBox),
    Text(TextNode),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Paragraph(_) => "paragraph",
            Node::Table(_) => "table",
            Node::Row(_) => "row",
            Node::VBox(_) => "vbox",
            Node::Text(_) => "text",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Node::Document(n) => &n.style,
            Node::Paragraph(n) => &n.style,
            Node::Table(n) => &n.style,
            Node::Row(n) => &n.style,
            Node::VBox(n) => &n.style,
            Node::Text(n) => &n.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Node::Document(n) => &mut n.style,
            Node::Paragraph(n) => &mut n.style,
            Node::Table(n) => &mut n.style,
            Node::Row(n) => &mut n.style,
            Node::VBox(n) => &mut n.style,
            Node::Text(n) => &mut n.style,
        }
    }
}

/// The only leaf: a run of text, wrapped at the `width` in effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: TextNode,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: TextNode,
    pub items: Vec<Node>,
    pub style: Style,
}

/// Every row in a table, header included, must have as many cells as the
/// first body row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub title: TextNode,
    pub rows: Vec<Row>,
    pub header_row: Option<Row>,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub items: Vec<TextNode>,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VBox {
    pub items: Vec<Node>,
    pub style: Style,
}

pub fn text(text: impl Into<String>) -> TextNode {
    TextNode {
        text: text.into(),
        style: Style::default(),
    }
}

pub fn paragraph(text: impl Into<TextNode>) -> Paragraph {
    Paragraph {
        text: text.into(),
        style: Style::default(),
    }
}

pub fn document(title: impl Into<TextNode>) -> Document {
    Document {
        title: title.into(),
        ..Document::default()
    }
}

pub fn table(title: impl Into<TextNode>) -> Table {
    Table {
        title: title.into(),
        ..Table::default()
    }
}

pub fn row<I, T>(items: I) -> Row
where
    I: IntoIterator<Item = T>,
    T: Into<TextNode>,
{
    Row::default().with_items(items)
}

pub fn vbox<I, N>(items: I) -> VBox
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    VBox::default().with_items(items)
}

macro_rules! with_style {
    ($($ty:ty),*) => {$(
        impl $ty {
            pub fn with_style(mut self, style: Style) -> Self {
                self.style = style;
                self
            }
        }
    )*};
}

with_style!(TextNode, Paragraph, Document, Table, Row, VBox);

/// Sequence operations on a node's `items` field. Everything inserted goes
/// through `Into`, which is where raw strings become text nodes.
macro_rules! item_sequence {
    ($ty:ty, $item:ty) => {
        impl $ty {
            pub fn with_items<I, T>(mut self, items: I) -> Self
            where
                I: IntoIterator<Item = T>,
                T: Into<$item>,
            {
                self.items.extend(items.into_iter().map(Into::into));
                self
            }

            pub fn push(&mut self, item: impl Into<$item>) {
                self.items.push(item.into());
            }

            pub fn insert(&mut self, index: usize, item: impl Into<$item>) {
                self.items.insert(index, item.into());
            }

            /// Replaces the item at `index`, returning the old one.
            pub fn set(&mut self, index: usize, item: impl Into<$item>) -> $item {
                core::mem::replace(&mut self.items[index], item.into())
            }

            pub fn len(&self) -> usize {
                self.items.len()
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            pub fn iter(&self) -> core::slice::Iter<'_, $item> {
                self.items.iter()
            }
        }

        impl Index<usize> for $ty {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.items[index]
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.items[index]
            }
        }
    };
}

item_sequence!(Document, Node);
item_sequence!(Row, TextNode);
item_sequence!(VBox, Node);

impl Table {
    pub fn with_rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Row>,
    {
        self.rows.extend(rows);
        self
    }

    pub fn with_header(mut self, header: Row) -> Self {
        self.header_row = Some(header);
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn set_header(&mut self, header: Option<Row>) -> Option<Row> {
        core::mem::replace(&mut self.header_row, header)
    }

    /// Number of columns, read from the first body row.
    pub fn column_count(&self) -> Option<usize> {
        self.rows.first().map(Row::len)
    }
}

impl From<&str> for TextNode {
    fn from(value: &str) -> Self {
        text(value)
    }
}

impl From<String> for TextNode {
    fn from(value: String) -> Self {
        text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(text(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(text(value))
    }
}

impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Node::Text(value)
    }
}

impl From<Paragraph> for Node {
    fn from(value: Paragraph) -> Self {
        Node::Paragraph(value)
    }
}

impl From<Document> for Node {
    fn from(value: Document) -> Self {
        Node::Document(value)
    }
}

impl From<Table> for Node {
    fn from(value: Table) -> Self {
        Node::Table(value)
    }
}

impl From<Row> for Node {
    fn from(value: Row) -> Self {
        Node::Row(value)
    }
}

impl From<VBox> for Node {
    fn from(value: VBox) -> Self {
        Node::VBox(value)
    }
}
