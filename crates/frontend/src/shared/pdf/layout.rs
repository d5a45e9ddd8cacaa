/// Page size and margins in PDF points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub const A4_PORTRAIT: PageGeometry = PageGeometry {
        width: 595.28,
        height: 841.89,
        margin: 40.0,
    };

    /// Lowest point a line may reach
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A piece of text placed on a page.
///
/// `y` is the top of the line box measured from the top edge of the page,
/// `height` is the vertical space the line occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub text: String,
    pub size: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub runs: Vec<TextRun>,
}

/// Result of a finished layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn runs(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(page, p)| p.runs.iter().map(move |run| (page, run)))
    }

    /// Page index holding the first run whose text equals `text`
    pub fn page_of(&self, text: &str) -> Option<usize> {
        self.runs()
            .find(|(_, run)| run.text == text)
            .map(|(page, _)| page)
    }
}

/// Top-down layout with a running vertical cursor.
///
/// Every line goes through [`PageLayout::reserve`] first, so nothing is
/// placed past the bottom margin unless a single line is taller than the
/// whole printable area.
#[derive(Debug, Clone)]
pub struct PageLayout {
    geometry: PageGeometry,
    cursor: f32,
    pages: Vec<LayoutPage>,
}

impl PageLayout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            cursor: geometry.margin,
            pages: vec![LayoutPage::default()],
        }
    }

    #[cfg(test)]
    fn cursor(&self) -> f32 {
        self.cursor
    }

    #[cfg(test)]
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Reserve `height` points below the cursor or paginate.
    ///
    /// Starts a new page and moves the cursor back to the top margin when
    /// the block would cross the bottom margin. A page that is still empty
    /// is never abandoned. Returns `true` when a page was started.
    pub fn reserve(&mut self, height: f32) -> bool {
        let at_top = self.cursor <= self.geometry.margin;
        if !at_top && self.cursor + height > self.geometry.bottom_limit() {
            self.pages.push(LayoutPage::default());
            self.cursor = self.geometry.margin;
            return true;
        }
        false
    }

    /// Moves the cursor down without placing anything.
    pub fn skip(&mut self, height: f32) {
        self.cursor += height;
    }

    /// One line of text at the left margin.
    pub fn write(&mut self, height: f32, text: impl Into<String>, size: f32, weight: FontWeight) {
        self.reserve(height);
        self.place(0.0, height, text.into(), size, weight);
        self.cursor += height;
    }

    /// Bold `key:` at the left margin and the plain value `value_offset`
    /// points to the right of it, on the same line.
    pub fn write_pair(&mut self, height: f32, key: &str, value: &str, value_offset: f32, size: f32) {
        self.reserve(height);
        self.place(0.0, height, format!("{}:", key), size, FontWeight::Bold);
        self.place(value_offset, height, value.to_string(), size, FontWeight::Regular);
        self.cursor += height;
    }

    fn place(&mut self, offset: f32, height: f32, text: String, size: f32, weight: FontWeight) {
        let run = TextRun {
            x: self.geometry.margin + offset,
            y: self.cursor,
            height,
            text,
            size,
            weight,
        };
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
    }

    pub fn finish(self) -> LayoutDocument {
        LayoutDocument {
            geometry: self.geometry,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_page() -> PageGeometry {
        PageGeometry {
            width: 200.0,
            height: 140.0,
            margin: 20.0,
        }
    }

    #[test]
    fn test_reserve_fits_on_current_page() {
        let mut layout = PageLayout::new(small_page());
        layout.skip(50.0);
        assert!(!layout.reserve(50.0));
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.cursor(), 70.0);
    }

    #[test]
    fn test_reserve_breaks_page() {
        let mut layout = PageLayout::new(small_page());
        layout.skip(90.0);
        assert!(layout.reserve(20.0));
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.cursor(), 20.0);
    }

    #[test]
    fn test_oversized_block_does_not_loop_on_empty_page() {
        let mut layout = PageLayout::new(small_page());
        assert!(!layout.reserve(500.0));
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn test_every_line_is_paginated() {
        let geometry = small_page();
        let mut layout = PageLayout::new(geometry);
        for i in 0..20 {
            layout.write_pair(18.0, &format!("Key {}", i), "value", 60.0, 12.0);
        }
        let doc = layout.finish();

        // 100pt of printable height holds five 18pt lines
        assert_eq!(doc.page_count(), 4);
        for (_, run) in doc.runs() {
            assert!(run.y >= geometry.margin);
            assert!(run.y + run.height <= geometry.bottom_limit());
        }
    }

    #[test]
    fn test_pair_layout() {
        let mut layout = PageLayout::new(small_page());
        layout.write_pair(18.0, "Bags", "12", 150.0, 12.0);
        let doc = layout.finish();
        let runs = &doc.pages[0].runs;
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Bags:");
        assert_eq!(runs[0].weight, FontWeight::Bold);
        assert_eq!(runs[1].x, 170.0);
        assert_eq!(runs[1].weight, FontWeight::Regular);
        assert_eq!(doc.page_of("12"), Some(0));
    }
}
