//! Блок карты и его вложенные поля

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::Axis;

/// Минимальный размер блока по любой оси
pub const MIN_BLOCK_SIZE: f64 = 0.1;

/// Материал по умолчанию
pub const DEFAULT_MATERIAL: &str = "gray";

/// Вектор с необязательными компонентами.
/// Отсутствующая компонента берёт значение по умолчанию при чтении.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3Fields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Vec3Fields {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        };
        *slot = Some(value);
    }
}

/// Блок на карте.
///
/// Все поля необязательны: чтение через аксессоры подставляет значения
/// по умолчанию, запись создаёт вложенный объект только при первой записи.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, deserialize_with = "lenient_vec3", skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3Fields>,
    #[serde(default, deserialize_with = "lenient_vec3", skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec3Fields>,
    #[serde(default, deserialize_with = "lenient_vec3", skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3Fields>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Неизвестные ключи сохраняются как есть
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    /// Пустой блок с именем
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, p: [f64; 3]) -> Self {
        self.position = Some(Vec3Fields::new(p[0], p[1], p[2]));
        self
    }

    pub fn with_size(mut self, s: [f64; 3]) -> Self {
        self.size = Some(Vec3Fields::new(
            s[0].max(MIN_BLOCK_SIZE),
            s[1].max(MIN_BLOCK_SIZE),
            s[2].max(MIN_BLOCK_SIZE),
        ));
        self
    }

    pub fn with_rotation(mut self, r: [f64; 3]) -> Self {
        self.rotation = Some(Vec3Fields::new(
            wrap_degrees(r[0]),
            wrap_degrees(r[1]),
            wrap_degrees(r[2]),
        ));
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    // ── Чтение с умолчаниями ─────────────────────────────────

    pub fn position(&self, axis: Axis) -> f64 {
        read(&self.position, axis, 0.0)
    }

    pub fn size(&self, axis: Axis) -> f64 {
        read(&self.size, axis, 1.0)
    }

    /// Угол поворота в градусах
    pub fn rotation(&self, axis: Axis) -> f64 {
        read(&self.rotation, axis, 0.0)
    }

    pub fn material(&self) -> &str {
        self.material.as_deref().unwrap_or(DEFAULT_MATERIAL)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    // ── Запись ───────────────────────────────────────────────

    pub fn set_position(&mut self, axis: Axis, value: f64) {
        self.position.get_or_insert_with(Vec3Fields::default).set(axis, value);
    }

    /// Размер не опускается ниже [`MIN_BLOCK_SIZE`]
    pub fn set_size(&mut self, axis: Axis, value: f64) {
        self.size
            .get_or_insert_with(Vec3Fields::default)
            .set(axis, value.max(MIN_BLOCK_SIZE));
    }

    /// Угол приводится к диапазону [0, 360)
    pub fn set_rotation(&mut self, axis: Axis, degrees: f64) {
        self.rotation
            .get_or_insert_with(Vec3Fields::default)
            .set(axis, wrap_degrees(degrees));
    }
}

/// Приведение угла в градусах к [0, 360)
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid может вернуть ровно 360.0 для очень малых отрицательных значений
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn read(fields: &Option<Vec3Fields>, axis: Axis, default: f64) -> f64 {
    fields.as_ref().and_then(|f| f.get(axis)).unwrap_or(default)
}

/// Некорректный вложенный объект считается отсутствующим
fn lenient_vec3<'de, D>(deserializer: D) -> Result<Option<Vec3Fields>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => Some(Vec3Fields {
            x: map.get("x").and_then(Value::as_f64),
            y: map.get("y").and_then(Value::as_f64),
            z: map.get("z").and_then(Value::as_f64),
        }),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_block() {
        let b = Block::default();
        for axis in Axis::ALL {
            assert_eq!(b.position(axis), 0.0);
            assert_eq!(b.size(axis), 1.0);
            assert_eq!(b.rotation(axis), 0.0);
        }
        assert_eq!(b.material(), "gray");
        assert_eq!(b.name(), "");
    }

    #[test]
    fn test_reading_does_not_create_fields() {
        let b = Block::default();
        let _ = b.position(Axis::X);
        let _ = b.size(Axis::Y);
        assert!(b.position.is_none());
        assert!(b.size.is_none());
        assert_eq!(serde_json::to_string(&b).unwrap(), "{}");
    }

    #[test]
    fn test_partial_fields_default_per_axis() {
        let b: Block =
            serde_json::from_str(r#"{"position": {"x": 2.5}, "size": {"z": 3}}"#).unwrap();
        assert_eq!(b.position(Axis::X), 2.5);
        assert_eq!(b.position(Axis::Y), 0.0);
        assert_eq!(b.size(Axis::Z), 3.0);
        assert_eq!(b.size(Axis::X), 1.0);
    }

    #[test]
    fn test_malformed_fields_resolve_to_defaults() {
        let json = r#"{"position": "oops", "size": {"x": "wide", "y": 2}, "rotation": [1, 2], "material": 7, "name": null}"#;
        let b: Block = serde_json::from_str(json).unwrap();
        assert_eq!(b.position(Axis::X), 0.0);
        assert_eq!(b.size(Axis::X), 1.0);
        assert_eq!(b.size(Axis::Y), 2.0);
        assert_eq!(b.rotation(Axis::Y), 0.0);
        assert_eq!(b.material(), "gray");
        assert_eq!(b.name(), "");
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let json = r#"{"name": "door", "script": "open.lua"}"#;
        let b: Block = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&b).unwrap();
        assert_eq!(out["script"], "open.lua");
        assert_eq!(out["name"], "door");
    }

    #[test]
    fn test_set_size_clamps_to_minimum() {
        let mut b = Block::default();
        b.set_size(Axis::X, -4.0);
        b.set_size(Axis::Y, 0.05);
        b.set_size(Axis::Z, 2.0);
        assert_eq!(b.size(Axis::X), MIN_BLOCK_SIZE);
        assert_eq!(b.size(Axis::Y), MIN_BLOCK_SIZE);
        assert_eq!(b.size(Axis::Z), 2.0);
    }

    #[test]
    fn test_set_rotation_wraps() {
        let mut b = Block::default();
        b.set_rotation(Axis::Y, 370.0);
        assert!((b.rotation(Axis::Y) - 10.0).abs() < 1e-9);
        b.set_rotation(Axis::Y, -30.0);
        assert!((b.rotation(Axis::Y) - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_degrees_range() {
        for d in [-720.0, -360.0, -1e-20, 0.0, 359.999, 360.0, 1080.5] {
            let w = wrap_degrees(d);
            assert!((0.0..360.0).contains(&w), "{d} -> {w}");
        }
    }

    #[test]
    fn test_write_creates_only_touched_field() {
        let mut b = Block::default();
        b.set_position(Axis::Z, 1.0);
        let out = serde_json::to_value(&b).unwrap();
        assert_eq!(out["position"], serde_json::json!({"z": 1.0}));
        assert!(out.get("size").is_none());
    }
}
