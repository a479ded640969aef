//! Minimal line-oriented markdown reader for post bodies: headings, fenced
//! code, bullet lists, and paragraphs. Inline markup is left as text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Code { language: Option<String>, body: String },
    List(Vec<String>),
    Paragraph(String),
}

pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    let mut code: Option<(Option<String>, Vec<&str>)> = None;

    fn flush(blocks: &mut Vec<Block>, paragraph: &mut Vec<&str>, list: &mut Vec<String>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(paragraph.join(" ")));
            paragraph.clear();
        }
        if !list.is_empty() {
            blocks.push(Block::List(std::mem::take(list)));
        }
    }

    for line in source.lines() {
        let trimmed = line.trim();

        if let Some((language, body)) = code.as_mut() {
            if trimmed.starts_with("```") {
                blocks.push(Block::Code {
                    language: language.take(),
                    body: body.join("\n"),
                });
                code = None;
            } else {
                body.push(line);
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("```") {
            flush(&mut blocks, &mut paragraph, &mut list);
            let language = Some(rest.trim().to_string()).filter(|l| !l.is_empty());
            code = Some((language, Vec::new()));
        } else if trimmed.is_empty() {
            flush(&mut blocks, &mut paragraph, &mut list);
        } else if let Some((level, text)) = heading(trimmed) {
            flush(&mut blocks, &mut paragraph, &mut list);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            if !paragraph.is_empty() {
                blocks.push(Block::Paragraph(paragraph.join(" ")));
                paragraph.clear();
            }
            list.push(item.trim().to_string());
        } else {
            if !list.is_empty() {
                blocks.push(Block::List(std::mem::take(&mut list)));
            }
            paragraph.push(trimmed);
        }
    }

    // An unterminated fence keeps whatever it collected.
    if let Some((language, body)) = code {
        blocks.push(Block::Code {
            language,
            body: body.join("\n"),
        });
    }
    flush(&mut blocks, &mut paragraph, &mut list);
    blocks
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text.trim()))
}
