//! XML roster codec.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <students>
//!   <student student_id="124017">
//!     <first_name>Sabina</first_name>
//!     <last_name>Babaeva</last_name>
//!     <birth_date>2005-03-22</birth_date>
//!     <enrollments>
//!       <enrollment>
//!         <course_code>09.03.03</course_code>
//!         <enrollment_date>2025-09-01T10:20:00</enrollment_date>
//!         <grade>48</grade>
//!       </enrollment>
//!     </enrollments>
//!     <groups><group>ИДБ-24-11</group></groups>
//!   </student>
//! </students>
//! ```
//!
//! `<grade>` is omitted when no grade is set. On decode `<enrollments>` and
//! `<groups>` are optional; every other element is required.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

use super::record::{EnrollmentRecord, StudentRecord};
use crate::error::CodecError;

pub(crate) fn encode(records: &[StudentRecord], indent: usize) -> Result<String, CodecError> {
    let mut writer = if indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    } else {
        Writer::new(Vec::new())
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("students")))?;
    for record in records {
        write_student(&mut writer, record)?;
    }
    writer.write_event(Event::End(BytesEnd::new("students")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| CodecError::Format(e.to_string()))
}

fn write_student<W: Write>(w: &mut Writer<W>, s: &StudentRecord) -> quick_xml::Result<()> {
    let mut start = BytesStart::new("student");
    start.push_attribute(("student_id", s.student_id.as_str()));
    w.write_event(Event::Start(start))?;
    write_text_element(w, "first_name", &s.first_name)?;
    write_text_element(w, "last_name", &s.last_name)?;
    write_text_element(w, "birth_date", &s.birth_date)?;

    w.write_event(Event::Start(BytesStart::new("enrollments")))?;
    for e in &s.enrollments {
        w.write_event(Event::Start(BytesStart::new("enrollment")))?;
        write_text_element(w, "course_code", &e.course_code)?;
        write_text_element(w, "enrollment_date", &e.enrollment_date)?;
        if let Some(grade) = e.grade {
            write_text_element(w, "grade", &grade.to_string())?;
        }
        w.write_event(Event::End(BytesEnd::new("enrollment")))?;
    }
    w.write_event(Event::End(BytesEnd::new("enrollments")))?;

    w.write_event(Event::Start(BytesStart::new("groups")))?;
    for g in &s.groups {
        write_text_element(w, "group", g)?;
    }
    w.write_event(Event::End(BytesEnd::new("groups")))?;

    w.write_event(Event::End(BytesEnd::new("student")))
}

fn write_text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    text: &str,
) -> quick_xml::Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))
}

pub(crate) fn decode(text: &str) -> Result<Vec<StudentRecord>, CodecError> {
    let root = parse_tree(text)?;
    if root.name != "students" {
        return Err(CodecError::Structure(format!(
            "expected root <students>, found <{}>",
            root.name
        )));
    }
    root.children_named("student").map(decode_student).collect()
}

fn decode_student(el: &Element) -> Result<StudentRecord, CodecError> {
    let student_id = el
        .attribute("student_id")
        .ok_or_else(|| CodecError::Structure("<student> without student_id".into()))?
        .to_string();

    let groups = match el.child("groups") {
        Some(groups) => groups
            .children_named("group")
            .map(|g| g.text.clone())
            .collect(),
        None => Vec::new(),
    };

    let enrollments = match el.child("enrollments") {
        Some(ens) => ens
            .children_named("enrollment")
            .map(|en| decode_enrollment(en, &student_id))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(StudentRecord {
        first_name: el.required_text("first_name", &student_id)?,
        last_name: el.required_text("last_name", &student_id)?,
        birth_date: el.required_text("birth_date", &student_id)?,
        student_id,
        enrollments,
        groups,
    })
}

fn decode_enrollment(el: &Element, student_id: &str) -> Result<EnrollmentRecord, CodecError> {
    let grade = match el.child("grade") {
        Some(g) if !g.text.trim().is_empty() => Some(g.text.trim().parse::<i32>().map_err(|_| {
            CodecError::Format(format!(
                "student {student_id}: invalid grade '{}'",
                g.text
            ))
        })?),
        _ => None,
    };
    Ok(EnrollmentRecord {
        course_code: el.required_text("course_code", student_id)?,
        enrollment_date: el.required_text("enrollment_date", student_id)?,
        grade,
    })
}

/// Minimal element tree, enough for the roster layout.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, CodecError> {
        let mut el = Element {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            ..Default::default()
        };
        for attr in start.attributes() {
            let attr = attr.map_err(|e| CodecError::Parse(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            el.attributes.push((key, value));
        }
        Ok(el)
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn required_text(&self, name: &str, student_id: &str) -> Result<String, CodecError> {
        self.child(name).map(|c| c.text.clone()).ok_or_else(|| {
            CodecError::Structure(format!(
                "student {student_id}: <{}> is missing <{name}>",
                self.name
            ))
        })
    }
}

/// Elements that hold only child elements, never text.
const CONTAINERS: [&str; 5] = ["students", "student", "enrollments", "enrollment", "groups"];

fn parse_tree(text: &str) -> Result<Element, CodecError> {
    let mut reader = Reader::from_str(text);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Element::from_start(&e)?),
            Event::Empty(e) => {
                let el = Element::from_start(&e)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| CodecError::Parse("unbalanced closing tag".into()))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(t) => {
                if let Some(top) = stack.last_mut() {
                    let text = t.unescape()?;
                    // Indentation between container elements; leaf text is kept verbatim.
                    if !(CONTAINERS.contains(&top.name.as_str()) && text.trim().is_empty()) {
                        top.text.push_str(&text);
                    }
                }
            }
            Event::CData(t) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&t.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::Parse("unexpected end of document".into()));
    }
    root.ok_or_else(|| CodecError::Parse("document has no root element".into()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(CodecError::Parse("multiple root elements".into())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(grade: Option<i32>) -> StudentRecord {
        StudentRecord {
            student_id: "124017".into(),
            first_name: "Sabina".into(),
            last_name: "Babaeva".into(),
            birth_date: "2005-03-22".into(),
            enrollments: vec![EnrollmentRecord {
                course_code: "09.03.03".into(),
                enrollment_date: "2025-09-01T10:20:00".into(),
                grade,
            }],
            groups: vec!["ИДБ-24-11".into()],
        }
    }

    #[test]
    fn test_encode_layout() {
        let text = encode(&[sample(Some(48))], 2).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("<student student_id=\"124017\">"));
        assert!(text.contains("<first_name>Sabina</first_name>"));
        assert!(text.contains("<grade>48</grade>"));
        assert!(text.contains("<group>ИДБ-24-11</group>"));
    }

    #[test]
    fn test_unset_grade_is_omitted() {
        let text = encode(&[sample(None)], 0).unwrap();
        assert!(!text.contains("<grade"));
        let records = decode(&text).unwrap();
        assert_eq!(records[0].enrollments[0].grade, None);
    }

    #[test]
    fn test_decode_matches_encoded_record() {
        let original = sample(Some(48));
        let text = encode(&[original.clone()], 2).unwrap();
        assert_eq!(decode(&text).unwrap(), vec![original]);
    }

    #[test]
    fn test_edge_whitespace_is_preserved() {
        let mut s = sample(Some(48));
        s.first_name = " Sabina".into();
        s.last_name = "Babaeva ".into();
        s.groups = vec!["ИДБ-24-11 ".into()];
        s.enrollments[0].course_code = " 09.03.03".into();

        for indent in [0, 2] {
            let text = encode(&[s.clone()], indent).unwrap();
            assert_eq!(decode(&text).unwrap(), vec![s.clone()]);
        }
    }

    #[test]
    fn test_indentation_is_not_text() {
        let text = concat!(
            "<students>\n",
            "  <student student_id=\"1\">\n",
            "    <first_name>A</first_name>\n",
            "    <last_name>B</last_name>\n",
            "    <birth_date>2005-01-01</birth_date>\n",
            "  </student>\n",
            "</students>",
        );
        let records = decode(text).unwrap();
        assert_eq!(records[0].first_name, "A");
        assert_eq!(records[0].birth_date, "2005-01-01");
    }

    #[test]
    fn test_escaping() {
        let mut s = sample(None);
        s.first_name = "A & <B>".into();
        let text = encode(&[s], 0).unwrap();
        assert!(text.contains("A &amp; &lt;B&gt;"));
        assert_eq!(decode(&text).unwrap()[0].first_name, "A & <B>");
    }

    #[test]
    fn test_optional_sections_and_empty_grade() {
        let text = r#"<?xml version="1.0"?>
            <students>
              <student student_id="1">
                <first_name>A</first_name><last_name>B</last_name>
                <birth_date>2005-01-01</birth_date>
                <enrollments>
                  <enrollment>
                    <course_code>X</course_code>
                    <enrollment_date>2025-09-01</enrollment_date>
                    <grade/>
                  </enrollment>
                </enrollments>
              </student>
            </students>"#;
        let records = decode(text).unwrap();
        assert!(records[0].groups.is_empty());
        assert_eq!(records[0].enrollments[0].grade, None);
    }

    #[test]
    fn test_missing_child_is_structure_error() {
        let text = r#"<students><student student_id="1"><first_name>A</first_name>
            <birth_date>2005-01-01</birth_date></student></students>"#;
        let err = decode(text).unwrap_err();
        assert!(matches!(err, CodecError::Structure(ref m) if m.contains("last_name")));
    }

    #[test]
    fn test_missing_attribute_is_structure_error() {
        let text = "<students><student><first_name>A</first_name></student></students>";
        assert!(matches!(decode(text), Err(CodecError::Structure(_))));
    }

    #[test]
    fn test_bad_grade_is_format_error() {
        let text = r#"<students><student student_id="1">
            <first_name>A</first_name><last_name>B</last_name><birth_date>x</birth_date>
            <enrollments><enrollment><course_code>X</course_code>
            <enrollment_date>2025-09-01</enrollment_date><grade>high</grade>
            </enrollment></enrollments></student></students>"#;
        assert!(matches!(decode(text), Err(CodecError::Format(_))));
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        assert!(matches!(
            decode("<students><student></students>"),
            Err(CodecError::Parse(_))
        ));
        assert!(matches!(decode(""), Err(CodecError::Parse(_))));
        assert!(matches!(decode("<students>"), Err(CodecError::Parse(_))));
    }

    #[test]
    fn test_wrong_root_is_structure_error() {
        assert!(matches!(
            decode("<people/>"),
            Err(CodecError::Structure(_))
        ));
    }
}
