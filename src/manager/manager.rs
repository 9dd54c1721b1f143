use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;

use serde::Deserialize;

use super::managererror::ManagerError;

#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}

pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    pub fn get(&self, name: &String) -> Result<V, ManagerError> {
        let map = self.map();
        let elem_opt = map.get(name);
        elem_opt.map_or(
            Err(ManagerError::NameNotFound(name.to_owned())),
            |elem| Ok(elem.clone())
        )
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.map().insert(named_object.name().to_owned(), v);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &Vec<serde_json::Value>) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            let _ = self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}
