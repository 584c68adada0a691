//! HTML serialization of fragments.
use crate::fragment::{Element, Fragment};

use std::fmt::{self, Write};

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Empty => Ok(()),
            Fragment::Text(text) => escape_text(f, text),
            Fragment::Element(element) => fmt::Display::fmt(element, f),
            Fragment::Sequence(fragments) => fragments
                .iter()
                .try_for_each(|fragment| fmt::Display::fmt(fragment, f)),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag().as_str();

        write!(f, "<{tag}")?;

        for attribute in self.attributes() {
            write!(f, " {}", attribute.name)?;

            if let Some(value) = &attribute.value {
                f.write_str("=\"")?;
                escape_attribute(f, value)?;
                f.write_char('"')?;
            }
        }

        f.write_char('>')?;

        if self.tag().is_void() {
            return Ok(());
        }

        for child in self.child_nodes() {
            fmt::Display::fmt(child, f)?;
        }

        write!(f, "</{tag}>")
    }
}

fn escape_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

fn escape_attribute(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            '<' => f.write_str("&lt;")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
