use failure::Fail;

#[derive(Debug, Fail)]
pub enum InventoryError {
    #[fail(display = "Node {} is missing '{}'", node, attribute)]
    MalformedNode {
        node: String,
        attribute: &'static str,
    },
}
