// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/inspector/tree.rs - 可展开的 JSON 树
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

//! 节点路径从 `root` 开始，对象子节点为 `{path}.{key}`，数组元素为 `{path}[{i}]`。
//! 只有对象和非简单数组可以展开。

use std::{collections::BTreeSet, fmt};

use serde_json::Value;

pub const ROOT_PATH: &str = "root";

/// 数字或字符串组成的数组直接内联
fn is_simple_array(items: &[Value]) -> bool {
  items.iter().all(|v| v.is_number() || v.is_string())
}

fn is_expandable(value: &Value) -> bool {
  match value {
    Value::Object(_) => true,
    Value::Array(items) => !is_simple_array(items),
    _ => false,
  }
}

/// 整数值的浮点数不带小数部分
fn number_text(value: &Value) -> String {
  match value.as_f64() {
    Some(f) if value.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
    _ => value.to_string(),
  }
}

fn primitive_text(value: &Value) -> String {
  match value {
    Value::String(s) => format!("\"{s}\""),
    Value::Number(_) => number_text(value),
    other => other.to_string(),
  }
}

fn inline_array(items: &[Value]) -> String {
  let parts: Vec<String> = items
    .iter()
    .map(|item| match item {
      Value::String(s) => s.clone(),
      other => number_text(other),
    })
    .collect();
  format!("[{}]", parts.join(", "))
}

/// 展开状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonTree {
  expanded: BTreeSet<String>,
}

impl JsonTree {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_expanded(&self, path: &str) -> bool {
    self.expanded.contains(path)
  }

  pub fn expand(&mut self, path: impl Into<String>) {
    self.expanded.insert(path.into());
  }

  /// 返回切换后的状态
  pub fn toggle(&mut self, path: &str) -> bool {
    if self.expanded.remove(path) {
      false
    } else {
      self.expanded.insert(path.to_string());
      true
    }
  }

  pub fn expand_all(&mut self, value: &Value) {
    self.expand_from(value, ROOT_PATH.to_string());
  }

  fn expand_from(&mut self, value: &Value, path: String) {
    if !is_expandable(value) {
      return;
    }
    match value {
      Value::Object(map) => {
        for (key, child) in map {
          self.expand_from(child, format!("{path}.{key}"));
        }
      }
      Value::Array(items) => {
        for (i, child) in items.iter().enumerate() {
          self.expand_from(child, format!("{path}[{i}]"));
        }
      }
      _ => {}
    }
    self.expanded.insert(path);
  }

  pub fn render<'a>(&'a self, value: &'a Value) -> JsonTreeView<'a> {
    JsonTreeView { tree: self, value }
  }

  fn marker(&self, path: &str) -> &'static str {
    if self.is_expanded(path) { "-" } else { "+" }
  }

  fn write_node(
    &self,
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    path: &str,
    indent: usize,
  ) -> fmt::Result {
    let pad = " ".repeat(indent);
    match value {
      Value::Array(items) if is_simple_array(items) => writeln!(f, "{pad}{}", inline_array(items)),
      Value::Array(items) => {
        writeln!(f, "{pad}{} Array [{} items]", self.marker(path), items.len())?;
        if self.is_expanded(path) {
          for (i, item) in items.iter().enumerate() {
            writeln!(f, "{pad}  Item {}:", i + 1)?;
            self.write_node(f, item, &format!("{path}[{i}]"), indent + 4)?;
          }
        }
        Ok(())
      }
      Value::Object(map) => {
        let name = path.rsplit('.').next().filter(|s| !s.is_empty()).unwrap_or("Object");
        writeln!(f, "{pad}{} {} ({} properties)", self.marker(path), name, map.len())?;
        if self.is_expanded(path) {
          for (key, child) in map {
            match child {
              Value::Array(items) if is_simple_array(items) => {
                writeln!(f, "{pad}  {key}: {}", inline_array(items))?
              }
              Value::Array(_) | Value::Object(_) => {
                writeln!(f, "{pad}  {key}:")?;
                self.write_node(f, child, &format!("{path}.{key}"), indent + 4)?;
              }
              primitive => writeln!(f, "{pad}  {key}: {}", primitive_text(primitive))?,
            }
          }
        }
        Ok(())
      }
      primitive => writeln!(f, "{pad}{}", primitive_text(primitive)),
    }
  }
}

pub struct JsonTreeView<'a> {
  tree: &'a JsonTree,
  value: &'a Value,
}

impl fmt::Display for JsonTreeView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.tree.write_node(f, self.value, ROOT_PATH, 0)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sample() -> Value {
    json!({
      "width": 640,
      "refined_detections": [
        {"refined_label": "shirt", "bbox": [10, 20.5, 30, 40], "colors": [{"hex": "#fff", "rgb": [255, 255, 255]}]}
      ],
      "note": "ok"
    })
  }

  #[test]
  fn collapsed_root_shows_property_count() {
    let tree = JsonTree::new();
    assert_eq!(tree.render(&sample()).to_string(), "+ root (3 properties)\n");
  }

  #[test]
  fn expanded_nodes_show_children() {
    let value = sample();
    let mut tree = JsonTree::new();
    assert!(tree.toggle("root"));
    tree.toggle("root.refined_detections");
    tree.toggle("root.refined_detections[0]");
    let text = tree.render(&value).to_string();

    assert!(text.starts_with("- root (3 properties)\n"));
    assert!(text.contains("  width: 640\n"));
    assert!(text.contains("  note: \"ok\"\n"));
    assert!(text.contains("- Array [1 items]"));
    assert!(text.contains("Item 1:"));
    // 名称取路径按点号分割后的最后一段
    assert!(text.contains("- refined_detections[0] (3 properties)"));
    assert!(text.contains("bbox: [10, 20.5, 30, 40]"));
    assert!(text.contains("+ Array [1 items]"));
  }

  #[test]
  fn toggle_collapses_again() {
    let mut tree = JsonTree::new();
    tree.toggle("root");
    assert!(!tree.toggle("root"));
    assert!(!tree.is_expanded("root"));
  }

  #[test]
  fn expand_all_opens_every_container() {
    let value = sample();
    let mut tree = JsonTree::new();
    tree.expand_all(&value);
    for path in [
      "root",
      "root.refined_detections",
      "root.refined_detections[0]",
      "root.refined_detections[0].colors",
      "root.refined_detections[0].colors[0]",
    ] {
      assert!(tree.is_expanded(path), "{path}");
    }
    // 简单数组不会成为节点
    assert!(!tree.is_expanded("root.refined_detections[0].bbox"));
    let text = tree.render(&value).to_string();
    assert!(!text.contains('+'));
    assert!(text.contains("hex: \"#fff\""));
    assert!(text.contains("rgb: [255, 255, 255]"));
  }

  #[test]
  fn primitive_root_and_simple_arrays_are_inline() {
    let tree = JsonTree::new();
    assert_eq!(tree.render(&json!("x")).to_string(), "\"x\"\n");
    assert_eq!(tree.render(&json!(null)).to_string(), "null\n");
    assert_eq!(tree.render(&json!(["a", 1.0])).to_string(), "[a, 1]\n");
  }
}
