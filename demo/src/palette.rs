//! Role → glyph lookup. Cells carry only a logical [`Role`]; how each role
//! looks on screen is decided here.

use gridpath_core::Role;
use gridpath_ui::{AttrMask, Color, Glyph, Style};

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const BLACK: Color = Color::from_rgb(0, 0, 0);
pub const YELLOW: Color = Color::from_rgb(247, 240, 27);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const PINK_RED: Color = Color::from_rgb(255, 0, 128);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const GREY: Color = Color::from_rgb(128, 128, 128);

/// Style of the status and help lines under the grid.
pub const STATUS: Style = Style {
    fg: WHITE,
    bg: Color::DEFAULT,
    attrs: AttrMask::BOLD,
};
pub const HELP: Style = Style {
    fg: GREY,
    bg: Color::DEFAULT,
    attrs: AttrMask::NONE,
};

fn slot(role: Role) -> usize {
    match role {
        Role::Empty => 0,
        Role::Barrier => 1,
        Role::Start => 2,
        Role::End => 3,
        Role::Frontier => 4,
        Role::Visited => 5,
        Role::Path => 6,
    }
}

/// One glyph per role.
#[derive(Debug, Clone)]
pub struct Palette {
    glyphs: [Glyph; 7],
}

impl Palette {
    /// White board, black barriers, yellow start, turquoise end, green
    /// frontier, pink-red visited, purple path.
    pub fn classic() -> Self {
        let on = |bg: Color| Style::default().with_fg(BLACK).with_bg(bg);
        let mut glyphs = [Glyph::default(); 7];
        glyphs[slot(Role::Empty)] = Glyph::new(' ', on(WHITE));
        glyphs[slot(Role::Barrier)] = Glyph::new(' ', on(BLACK));
        glyphs[slot(Role::Start)] = Glyph::new('S', on(YELLOW).with_attrs(AttrMask::BOLD));
        glyphs[slot(Role::End)] = Glyph::new('E', on(TURQUOISE).with_attrs(AttrMask::BOLD));
        glyphs[slot(Role::Frontier)] = Glyph::new(' ', on(GREEN));
        glyphs[slot(Role::Visited)] = Glyph::new(' ', on(PINK_RED));
        glyphs[slot(Role::Path)] = Glyph::new(' ', on(PURPLE));
        Self { glyphs }
    }

    /// Glyph for the first screen column of a cell with `role`.
    #[inline]
    pub fn glyph(&self, role: Role) -> Glyph {
        self.glyphs[slot(role)]
    }

    /// Glyph for the remaining columns of the cell: same colours, blank.
    #[inline]
    pub fn fill(&self, role: Role) -> Glyph {
        Glyph::new(' ', self.glyph(role).style)
    }

}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
