use crate::artifacts::objects::digest::digest;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Object: Packable {
    fn display(&self) -> String;

    fn object_id(&self) -> ObjectId {
        digest(&self.serialize())
    }
}
