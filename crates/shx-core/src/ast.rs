pub const DEFAULT_TITLE: &str = "My Website";
pub const DEFAULT_BACKGROUND: &str = "background: linear-gradient(135deg, #3b82f6, #8b5cf6);";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Page,
    Background,
    Header,
    Text,
    List,
    Link,
    Image,
}

impl Command {
    /// Keywords in the order lines are checked against them.
    pub const TABLE: [(&'static str, Command); 7] = [
        ("page", Command::Page),
        ("bg/color", Command::Background),
        ("header", Command::Header),
        ("text", Command::Text),
        ("list", Command::List),
        ("link", Command::Link),
        ("image", Command::Image),
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Command::Page => "page",
            Command::Background => "bg/color",
            Command::Header => "header",
            Command::Text => "text",
            Command::List => "list",
            Command::Link => "link",
            Command::Image => "image",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageState {
    pub title: String,
    /// A full CSS declaration, e.g. `background-color: red;`.
    pub background: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub state: PageState,
    pub fragments: Vec<Fragment>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fragment {
    // 1-based source line.
    pub line: usize,
    pub kind: FragmentKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FragmentKind {
    Header {
        text: String,
        color: Option<String>,
    },
    Text {
        text: String,
        color: Option<String>,
        centered: bool,
    },
    ListItem {
        text: String,
        color: Option<String>,
    },
    Link {
        text: String,
        url: String,
    },
    Image {
        url: String,
    },
}

impl Fragment {
    pub fn is_list_item(&self) -> bool {
        matches!(self.kind, FragmentKind::ListItem { .. })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    Fragment(Fragment),
    List { items: Vec<Fragment> },
}

impl Block {
    /// First and last source line covered by this block.
    pub fn line_range(&self) -> (usize, usize) {
        match self {
            Block::Fragment(fragment) => (fragment.line, fragment.line),
            Block::List { items } => {
                let start = items.first().map(|item| item.line).unwrap_or(0);
                let end = items.last().map(|item| item.line).unwrap_or(start);
                (start, end)
            }
        }
    }
}

/// The assembled output handed back to a host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    pub html: String,
    pub title: String,
}
