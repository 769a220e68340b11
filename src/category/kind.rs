use crate::widget::WidgetSize;

/// Closed set of widget kinds the builder recognizes by name.
///
/// Classification is a case-insensitive substring match against
/// [`WidgetKind::KEYWORDS`], checked in order; the first hit wins. Anything
/// without a hit is `Other`, which defaults to a full-width widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Icon,
    Badge,
    Tag,
    Rating,
    Likes,
    Bookmark,
    Form,
    Card,
    Image,
    Search,
    Filter,
    Calendar,
    User,
    Comment,
    Accordion,
    Other,
}

impl WidgetKind {
    pub const KEYWORDS: &'static [(&'static str, WidgetKind)] = &[
        ("button", WidgetKind::Button),
        ("icon", WidgetKind::Icon),
        ("badge", WidgetKind::Badge),
        ("tag", WidgetKind::Tag),
        ("rating", WidgetKind::Rating),
        ("likes", WidgetKind::Likes),
        ("bookmark", WidgetKind::Bookmark),
        ("form", WidgetKind::Form),
        ("card", WidgetKind::Card),
        ("image", WidgetKind::Image),
        ("search", WidgetKind::Search),
        ("filter", WidgetKind::Filter),
        ("calendar", WidgetKind::Calendar),
        ("user", WidgetKind::User),
        ("comment", WidgetKind::Comment),
        ("accordion", WidgetKind::Accordion),
    ];

    pub fn classify(type_name: &str) -> Self {
        let lowered = type_name.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(WidgetKind::Other)
    }

    /// Size a freshly dropped widget starts with. Later resizes are independent.
    pub fn default_size(self) -> WidgetSize {
        match self {
            WidgetKind::Button
            | WidgetKind::Icon
            | WidgetKind::Badge
            | WidgetKind::Tag
            | WidgetKind::Rating
            | WidgetKind::Likes
            | WidgetKind::Bookmark => WidgetSize::Small,
            WidgetKind::Form
            | WidgetKind::Card
            | WidgetKind::Image
            | WidgetKind::Search
            | WidgetKind::Filter
            | WidgetKind::Calendar
            | WidgetKind::User
            | WidgetKind::Comment
            | WidgetKind::Accordion => WidgetSize::Medium,
            WidgetKind::Other => WidgetSize::Large,
        }
    }
}
