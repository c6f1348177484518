//! Offset-based element geometry.
//!
//! Rendered hosts expose per-element measurements (offsets relative to the
//! nearest positioned ancestor, client size). [`resolve_bounding_rect`]
//! combines those into a [`BoundingRect`] relative to that ancestor, or
//! reports that no measurable box exists yet.

/// Read access to the offset geometry of a laid-out element.
///
/// Mirrors what a rendered host reports for one element: offsets relative to
/// its positioning ancestor plus client size. Implement it for whatever the
/// host hands you; [`StaticElement`] is the plain-value implementation used
/// for fixtures and detached layouts.
pub trait LayoutElement {
    fn offset_top(&self) -> f64;
    fn offset_left(&self) -> f64;
    fn client_height(&self) -> f64;
    fn client_width(&self) -> f64;
    /// Nearest positioned ancestor, if the element has one.
    fn offset_parent(&self) -> Option<&dyn LayoutElement>;
}

/// Position and size of an element relative to a reference ancestor.
///
/// `bottom` and `right` are derived edges (`top + height`, `left + width`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub height: f64,
    pub width: f64,
    /// Historical alias of `top`. The axis swap (`x` tracking the vertical
    /// offset, `y` the horizontal one) is load-bearing for existing callers;
    /// do not straighten it out here.
    pub x: f64,
    /// Historical alias of `left`; see `x`.
    pub y: f64,
}

/// In-memory [`LayoutElement`] with fixed measurements.
///
/// Used for fixtures, catalog demos, and hosts that have no live layout tree
/// to query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticElement {
    pub offset_top: f64,
    pub offset_left: f64,
    pub client_height: f64,
    pub client_width: f64,
    pub offset_parent: Option<Box<StaticElement>>,
}

impl StaticElement {
    pub fn new(offset_top: f64, offset_left: f64, client_height: f64, client_width: f64) -> Self {
        Self {
            offset_top,
            offset_left,
            client_height,
            client_width,
            offset_parent: None,
        }
    }

    /// Attach a positioning ancestor.
    #[must_use]
    pub fn with_parent(mut self, parent: StaticElement) -> Self {
        self.offset_parent = Some(Box::new(parent));
        self
    }
}

impl LayoutElement for StaticElement {
    fn offset_top(&self) -> f64 {
        self.offset_top
    }

    fn offset_left(&self) -> f64 {
        self.offset_left
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn offset_parent(&self) -> Option<&dyn LayoutElement> {
        self.offset_parent
            .as_deref()
            .map(|parent| parent as &dyn LayoutElement)
    }
}

/// Resolve `element`'s bounding box relative to its positioning ancestor.
///
/// The ancestor is the element's own offset parent, falling back to
/// `default_container` when it has none. Returns `None` when no element is
/// supplied, when no ancestor can be found, or when any computed measurement
/// comes out zero or NaN: hosts report zeroes for elements that are detached
/// or not yet painted, so a zero is read as "no measurement" rather than as
/// a box flush against the ancestor's origin.
pub fn resolve_bounding_rect(
    element: Option<&dyn LayoutElement>,
    default_container: Option<&dyn LayoutElement>,
) -> Option<BoundingRect> {
    let element = element?;
    let ancestor = element.offset_parent().or(default_container)?;

    let top = element.offset_top() + ancestor.offset_top();
    let left = element.offset_left() + ancestor.offset_left();
    let height = element.client_height();
    let width = element.client_width();

    if [top, left, height, width].iter().any(|v| unmeasured(*v)) {
        return None;
    }

    Some(BoundingRect {
        top,
        bottom: top + height,
        left,
        right: left + width,
        height,
        width,
        x: top,
        y: left,
    })
}

fn unmeasured(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}
