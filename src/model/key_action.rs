//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Continuous scrolling
    /// Drag the page strip left by one scroll step. Default: h
    ScrollLeft,
    /// Drag the page strip right by one scroll step. Default: l
    ScrollRight,

    // Paging
    /// Snap to the previous page. Default: ←
    PrevPage,
    /// Snap to the next page. Default: →
    NextPage,
    /// Jump to the newest document. Default: g/Home
    FirstPage,
    /// Jump to the stats page. Default: G/End
    LastPage,

    // Capture
    /// Start a scan (the header's single affordance). Default: s
    Scan,

    // Action bar
    /// Rotate the visible document a quarter turn. Default: r
    RotateDocument,
    /// Delete the visible document. Default: d
    DeleteDocument,

    // Application
    /// Quit. Default: q/Ctrl+C
    Quit,
}
