use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::Session;
use std::io::Write;

impl Session {
    /// Print the object stored under a full ID, looking in the object store first
    /// and then in the commit graph
    pub fn cat_file(&mut self, sha: &str) -> anyhow::Result<()> {
        let object_id = match ObjectId::try_parse(sha.to_string()) {
            Ok(object_id) => object_id,
            Err(error) => {
                writeln!(self.writer, "Error: {error}")?;
                return Ok(());
            }
        };

        let display = if self.repository.database().contains(&object_id) {
            let blob = self.repository.database().parse_object_as_blob(&object_id);
            self.recover(blob)?.map(|blob| blob.display())
        } else {
            self.repository
                .history()
                .get(&object_id)
                .map(|commit| commit.display())
        };

        match display {
            Some(display) => writeln!(self.writer, "{display}")?,
            None => writeln!(self.writer, "Error: object {object_id} not found")?,
        }

        Ok(())
    }
}
