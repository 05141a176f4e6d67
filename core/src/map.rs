use crate::{error::MapError, gid::Gid};
use ndarray::Array2;
use serde_json::{Map as JsonMap, Value};
use std::{fs, path::Path};

/// a single entry of a map's `layers` array
///
/// Only the `data` array of tile layers is decoded, every other field is kept as raw json
/// so that it survives a load/save cycle untouched (including key order).
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    fields: JsonMap<String, Value>,

    /// decoded `data` array, `None` for object/image/group layers or encoded data
    tiles: Option<Vec<Gid>>,
}

impl Layer {
    fn from_value(layer_index: usize, value: Value) -> Result<Layer, MapError> {
        let Value::Object(mut fields) = value else {
            return Err(MapError::Shape(format!("layer {} is not an object", layer_index)));
        };

        let tiles = match fields.get_mut("data") {
            // the array is moved out, `to_value` puts the tiles back into the same slot
            Some(Value::Array(data)) => Some(
                std::mem::take(data)
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| {
                        Gid::try_from(&value).map_err(|_| MapError::InvalidTileReference {
                            layer: layer_index,
                            index,
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            _ => None,
        };

        Ok(Layer { fields, tiles })
    }

    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();

        if let Some(tiles) = &self.tiles {
            let data = tiles.iter().map(|gid| Value::from(*gid)).collect();
            fields.insert("data".to_string(), Value::Array(data));
        }

        Value::Object(fields)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn width(&self) -> Option<usize> {
        self.fields
            .get("width")
            .and_then(Value::as_u64)
            .and_then(|w| usize::try_from(w).ok())
    }

    pub fn height(&self) -> Option<usize> {
        self.fields
            .get("height")
            .and_then(Value::as_u64)
            .and_then(|h| usize::try_from(h).ok())
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match (key, &self.tiles) {
            ("data", Some(_)) => None,
            _ => self.fields.get(key),
        }
    }

    pub fn tiles(&self) -> Option<&[Gid]> {
        self.tiles.as_deref()
    }

    /// tiles as a (height, width) grid, index with `[[y, x]]`
    ///
    /// returns None if the layer has no tiles or its size does not match the data length
    pub fn grid(&self) -> Option<Array2<Gid>> {
        let tiles = self.tiles.as_ref()?;
        Array2::from_shape_vec((self.height()?, self.width()?), tiles.clone()).ok()
    }

    /// returns a copy of this layer with `f` applied to every tile, other layers are cloned
    pub fn map_tiles<F: Fn(Gid) -> Gid>(&self, f: F) -> Layer {
        Layer {
            fields: self.fields.clone(),
            tiles: self
                .tiles
                .as_ref()
                .map(|tiles| tiles.iter().copied().map(&f).collect()),
        }
    }
}

/// a parsed tiled json map (`.tmj`)
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    /// all top-level fields, `layers` only acts as a placeholder to keep its position
    fields: JsonMap<String, Value>,
    layers: Vec<Layer>,
}

impl MapDocument {
    pub fn from_value(value: Value) -> Result<MapDocument, MapError> {
        let Value::Object(mut fields) = value else {
            return Err(MapError::Shape("top level is not an object".to_string()));
        };

        let layers = match fields.get_mut("layers") {
            Some(Value::Array(layers)) => std::mem::take(layers),
            Some(_) => return Err(MapError::Shape("`layers` is not an array".to_string())),
            None => return Err(MapError::Shape("missing `layers`".to_string())),
        };

        let layers = layers
            .into_iter()
            .enumerate()
            .map(|(index, layer)| Layer::from_value(index, layer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MapDocument { fields, layers })
    }

    pub fn from_json_str(data: &str) -> Result<MapDocument, MapError> {
        MapDocument::from_value(serde_json::from_str(data)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<MapDocument, MapError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| MapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        MapDocument::from_json_str(&data)
    }

    pub fn to_value(&self) -> Value {
        let mut fields = self.fields.clone();
        let layers = self.layers.iter().map(Layer::to_value).collect();
        fields.insert("layers".to_string(), Value::Array(layers));

        Value::Object(fields)
    }

    /// serializes with 2 space indentation
    pub fn to_json_pretty(&self) -> Result<String, MapError> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MapError> {
        let path = path.as_ref();
        let serialized = self.to_json_pretty()?;

        fs::write(path, serialized).map_err(|source| MapError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            "layers" => None,
            _ => self.fields.get(key),
        }
    }

    /// copy of the document with its layers replaced, all other fields are cloned
    pub fn with_layers(&self, layers: Vec<Layer>) -> MapDocument {
        MapDocument {
            fields: self.fields.clone(),
            layers,
        }
    }
}
