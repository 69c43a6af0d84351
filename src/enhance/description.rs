// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/enhance/description.rs - 推荐说明的容错解析
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Outfit Guru Team <hello@outfitguru.com>

//! 上游的 LLM 输出经常把 JSON 包在 markdown 代码块里，甚至格式残缺。
//! 这里按顺序尝试若干策略，任何输入都能得到可展示的非空文本。

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::model::{FinalEnhancement, ItemExplained};

pub const DEFAULT_DESCRIPTION: &str =
  "We've curated these recommendations to complement your current outfit.";
pub const DEFAULT_STYLE: &str = "personalized style";
pub const DEFAULT_CONFIDENCE: &str = "medium";

// 两个模式均为字面量，编译不会失败
static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#""final_description"\s*:\s*"([^"]+)""#).expect("final_description pattern")
});

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#""(final_description|recommendation_style|confidence_level|items_explained)"\s*:"#)
    .expect("enhancement key pattern")
});

/// 某个策略解析出的说明
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDescription {
  pub final_description: String,
  /// 成功解析出的内嵌 JSON 文档，其余字段优先从这里取
  pub document: Option<Map<String, Value>>,
}

impl ParsedDescription {
  fn text(final_description: String) -> Self {
    Self {
      final_description,
      document: None,
    }
  }
}

type Strategy = fn(&str) -> Option<ParsedDescription>;

const STRATEGIES: &[(&str, Strategy)] = &[
  ("plain_text", plain_text),
  ("fenced_json", fenced_json),
  ("field_regex", field_regex),
  ("stripped_text", stripped_text),
];

/// 以 ```json、``json、任意反引号加 json，或 `{` 开头
pub fn looks_like_json(text: &str) -> bool {
  let trimmed = text.trim();
  if trimmed.starts_with('{') {
    return true;
  }
  trimmed.starts_with('`') && trimmed.trim_start_matches('`').starts_with("json")
}

/// 去掉开头的反引号与 json 标记、结尾的反引号与多余引号
fn strip_fence(text: &str) -> &str {
  let body = text.trim().trim_start_matches('`');
  let body = body.strip_prefix("json").unwrap_or(body);
  body
    .trim()
    .trim_end_matches(|c: char| c == '`' || c == '"' || c.is_whitespace())
}

pub fn plain_text(text: &str) -> Option<ParsedDescription> {
  if looks_like_json(text) {
    None
  } else {
    Some(ParsedDescription::text(text.to_string()))
  }
}

pub fn fenced_json(text: &str) -> Option<ParsedDescription> {
  let value: Value = serde_json::from_str(strip_fence(text)).ok()?;
  let Value::Object(document) = value else {
    return None;
  };
  let description = non_empty_str(document.get("final_description"))?.to_string();
  Some(ParsedDescription {
    final_description: description,
    document: Some(document),
  })
}

pub fn field_regex(text: &str) -> Option<ParsedDescription> {
  let captures = FIELD_RE.captures(text)?;
  Some(ParsedDescription::text(captures[1].to_string()))
}

pub fn stripped_text(text: &str) -> Option<ParsedDescription> {
  let body = KEY_RE.replace_all(strip_fence(text), "");
  let cleaned: String = body.chars().filter(|c| !matches!(c, '{' | '}' | '`')).collect();
  let cleaned = cleaned.replace("\\\"", "\"");
  let cleaned = cleaned.trim().trim_matches(|c: char| c == '"' || c == ',' || c.is_whitespace());
  if cleaned.is_empty() {
    None
  } else {
    Some(ParsedDescription::text(cleaned.to_string()))
  }
}

/// 依次尝试各策略，全部失败时返回固定文案
pub fn extract_description(text: &str) -> ParsedDescription {
  for (name, strategy) in STRATEGIES {
    if let Some(parsed) = strategy(text) {
      debug!("推荐说明由策略 {} 解析", name);
      return parsed;
    }
  }
  debug!("推荐说明无法解析，使用默认文案");
  ParsedDescription::text(DEFAULT_DESCRIPTION.to_string())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
  value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

fn first_str<'a>(candidates: [Option<&'a Value>; 2], fallback: &'a str) -> String {
  candidates
    .into_iter()
    .find_map(non_empty_str)
    .unwrap_or(fallback)
    .to_string()
}

fn items_explained(candidates: [Option<&Value>; 2]) -> Vec<ItemExplained> {
  candidates
    .into_iter()
    .flatten()
    .find_map(Value::as_array)
    .map(|items| {
      items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
    })
    .unwrap_or_default()
}

/// 将 `final_enhancement`（对象、字符串或缺失）解析为完整的说明
pub fn resolve_enhancement(raw: Option<&Value>) -> FinalEnhancement {
  let outer = raw.and_then(Value::as_object);
  let description_value = match raw {
    Some(Value::String(_)) => raw,
    _ => outer.and_then(|o| o.get("final_description")),
  };

  let parsed = match description_value {
    Some(Value::String(text)) => extract_description(text),
    Some(Value::Object(document)) => ParsedDescription {
      final_description: non_empty_str(document.get("final_description"))
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string(),
      document: Some(document.clone()),
    },
    _ => ParsedDescription::text(DEFAULT_DESCRIPTION.to_string()),
  };

  let document = parsed.document.as_ref();
  let field = |name: &str| [document.and_then(|d| d.get(name)), outer.and_then(|o| o.get(name))];

  let final_description = if parsed.final_description.trim().is_empty() {
    DEFAULT_DESCRIPTION.to_string()
  } else {
    parsed.final_description.clone()
  };

  FinalEnhancement {
    final_description,
    recommendation_style: first_str(field("recommendation_style"), DEFAULT_STYLE),
    confidence_level: first_str(field("confidence_level"), DEFAULT_CONFIDENCE),
    items_explained: items_explained(field("items_explained")),
  }
}
