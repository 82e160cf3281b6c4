//! Sectioned key/value documents with lossless round-trips.
#![forbid(unsafe_code)]

/// One line inside a section. Lines that don't parse as a `Key=Value` pair
/// (comments, blanks, malformed input) are kept verbatim so they survive a
/// parse/serialize round-trip untouched.
#[derive(Clone, Debug)]
enum SectionLine {
    Pair {
        key: String,
        value: String,
        // Original text of the line; cleared once the pair is rewritten.
        raw: Option<String>,
    },
    Raw(String),
}

#[derive(Clone, Debug)]
struct Section {
    name: String,
    lines: Vec<SectionLine>,
}

impl Section {
    fn pair_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, SectionLine::Pair { .. }))
            .count()
    }
}

/// An editable INI-style document: free text, then `[section]` headers each
/// followed by `Key=Value` lines. Parsing is total; anything unrecognized is
/// carried through unchanged.
#[derive(Clone, Debug, Default)]
pub struct IniDoc {
    // Lines before the first section header.
    prelude: Vec<String>,
    sections: Vec<Section>,
}

impl IniDoc {
    pub fn parse(text: &str) -> IniDoc {
        let mut doc = IniDoc::default();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
                doc.sections.push(Section {
                    name: trimmed[1..trimmed.len() - 1].trim().to_string(),
                    lines: Vec::new(),
                });
                continue;
            }
            let Some(section) = doc.sections.last_mut() else {
                doc.prelude.push(line.to_string());
                continue;
            };
            match parse_pair(line) {
                Some((key, value)) => section.lines.push(SectionLine::Pair {
                    key,
                    value,
                    raw: Some(line.to_string()),
                }),
                None => section.lines.push(SectionLine::Raw(line.to_string())),
            }
        }
        doc
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.prelude.iter().all(|l| l.trim().is_empty())
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.find_section(section).is_some()
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Raw string value of `key` in `section`, if present.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let sec = self.find_section(section)?;
        sec.lines.iter().find_map(|l| match l {
            SectionLine::Pair { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Boolean view of a value: `true`/`false`, case-insensitive.
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        match self.get(section, key)?.trim() {
            t if t.eq_ignore_ascii_case("true") => Some(true),
            t if t.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Float view of a value. Accepts anything `f32::from_str` does (sign,
    /// integer, fixed-point, exponent), with surrounding whitespace.
    pub fn get_f32(&self, section: &str, key: &str) -> Option<f32> {
        self.get(section, key)?.trim().parse::<f32>().ok()
    }

    /// Sets `key` in `section` to `value`, updating an existing pair in place
    /// or appending to the section. The section is created at the end of the
    /// document when missing.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let idx = match self.sections.iter().position(|s| s.name == section) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    lines: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        let sec = &mut self.sections[idx];
        for line in sec.lines.iter_mut() {
            if let SectionLine::Pair { key: k, value: v, raw } = line {
                if k == key {
                    *v = value.to_string();
                    *raw = None;
                    return;
                }
            }
        }
        sec.lines.push(SectionLine::Pair {
            key: key.to_string(),
            value: value.to_string(),
            raw: None,
        });
    }

    /// Removes `key` from `section`. Returns whether a pair was removed.
    pub fn remove(&mut self, section: &str, key: &str) -> bool {
        let Some(sec) = self.find_section_mut(section) else {
            return false;
        };
        let before = sec.lines.len();
        sec.lines.retain(|l| !matches!(l, SectionLine::Pair { key: k, .. } if k == key));
        sec.lines.len() != before
    }

    /// Drops `section` when it no longer holds any `Key=Value` pair. Returns
    /// whether the section was removed.
    pub fn remove_section_if_empty(&mut self, section: &str) -> bool {
        let Some(idx) = self.sections.iter().position(|s| s.name == section) else {
            return false;
        };
        if self.sections[idx].pair_count() > 0 {
            return false;
        }
        self.sections.remove(idx);
        true
    }

    fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }
}

impl std::fmt::Display for IniDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.prelude {
            writeln!(f, "{}", line)?;
        }
        for sec in &self.sections {
            writeln!(f, "[{}]", sec.name)?;
            for line in &sec.lines {
                match line {
                    SectionLine::Pair { raw: Some(raw), .. } => writeln!(f, "{}", raw)?,
                    SectionLine::Pair { key, value, raw: None } => {
                        writeln!(f, "{}={}", key, value)?
                    }
                    SectionLine::Raw(raw) => writeln!(f, "{}", raw)?,
                }
            }
        }
        Ok(())
    }
}

fn parse_pair(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}
