use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::utils::utils_errors::ScrewKinError;

/// Serializes an object to and from a JSON string.  Used to snapshot a manipulator
/// description so that it can be stored or sent elsewhere and rebuilt later.
pub trait ToAndFromJsonString: Serialize + DeserializeOwned {
    fn to_json_string(&self) -> String {
        serde_json::to_string(self).expect("error")
    }
    fn load_from_json_string(json_str: &str) -> Result<Self, ScrewKinError> where Self: Sized {
        let load: Result<Self, _> = serde_json::from_str(json_str);
        return if let Ok(load) = load { Ok(load) } else {
            Err(ScrewKinError::new_generic_error_str(&format!("Could not load json string {:?} into correct type.", json_str), file!(), line!()))
        }
    }
}
impl <T> ToAndFromJsonString for T where T: Serialize + DeserializeOwned { }

pub trait ToAndFromRonString: Serialize + DeserializeOwned {
    fn convert_to_ron_string(&self) -> String {
        ron::to_string(self).expect("error")
    }
    fn load_from_ron_string(ron_string: &str) -> Result<Self, ScrewKinError> where Self: Sized {
        let load: Result<Self, _> = ron::from_str(ron_string);
        return if let Ok(load) = load { Ok(load) } else {
            Err(ScrewKinError::new_generic_error_str(&format!("Could not load ron string {:?} into correct type.", ron_string), file!(), line!()))
        }
    }
}
impl <T> ToAndFromRonString for T where T: Serialize + DeserializeOwned { }
