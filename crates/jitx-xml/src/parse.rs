use crate::types::*;
use crate::{JitxXmlError, Result};
use roxmltree::{Document, Node};

pub struct ParsedJitxXml {
    pub board: Board,
    pub sch_insts: Vec<SchInst>,
}

/// Single-pass reader over a roxmltree document
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_document(&self, doc: &Document) -> Result<ParsedJitxXml> {
        let root = doc.root_element();

        let board = root
            .children()
            .find(|n| is_element(n, "BOARD"))
            .ok_or(JitxXmlError::MissingElement("BOARD"))?;
        let board = self.parse_board(&board);

        // SCH-INST may live under any number of SHEETs, so scan the whole tree
        let sch_insts = root
            .descendants()
            .filter(|n| is_element(n, "SCH-INST"))
            .map(|n| self.parse_sch_inst(&n))
            .collect();

        Ok(ParsedJitxXml { board, sch_insts })
    }

    fn parse_board(&self, node: &Node) -> Board {
        let insts = node
            .children()
            .filter(|n| is_element(n, "INST"))
            .map(|n| self.parse_board_inst(&n))
            .collect();

        Board { insts }
    }

    fn parse_board_inst(&self, node: &Node) -> BoardInst {
        let pose = node
            .children()
            .find(|n| is_element(n, "POSE"))
            .map(|n| self.parse_pose(&n));

        BoardInst {
            designator: optional_attr(node, "DESIGNATOR"),
            side: optional_attr(node, "SIDE"),
            package: optional_attr(node, "PACKAGE"),
            pose,
        }
    }

    fn parse_pose(&self, node: &Node) -> Pose {
        Pose {
            x: optional_attr(node, "X"),
            y: optional_attr(node, "Y"),
            angle: optional_attr(node, "ANGLE"),
        }
    }

    fn parse_sch_inst(&self, node: &Node) -> SchInst {
        let props = node
            .children()
            .find(|n| is_element(n, "PROPS"))
            .map(|n| Props {
                designator: optional_attr(&n, "DESIGNATOR"),
                mpn: optional_attr(&n, "MPN"),
            });

        SchInst { props }
    }
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn optional_attr(node: &Node, attr: &str) -> Option<String> {
    node.attribute(attr).map(str::to_owned)
}
