use crate::config::settings::ExportFormat;
use crate::material::geometry_mode::GeometryMode;
use strum_macros::{Display, IntoStaticStr};

const C_INDENT: &str = "    ";
const NO_FLAG: &str = "0x00";

#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoStaticStr, Display)]
pub enum GbiMacro {
    #[strum(serialize = "gsSP1Triangle")]
    OneTriangle,
    #[strum(serialize = "gsSP2Triangles")]
    TwoTriangles,
    #[strum(serialize = "gsSPVertex")]
    Vertex,
    #[strum(serialize = "gsSPSetGeometryMode")]
    SetGeometryMode,
    #[strum(serialize = "gsSPClearGeometryMode")]
    ClearGeometryMode,
    #[strum(serialize = "gsDPSetRenderMode")]
    SetRenderMode,
    #[strum(serialize = "gsDPSetCycleType")]
    SetCycleType,
    #[strum(serialize = "gsSPFogPosition")]
    FogPosition,
    #[strum(serialize = "gsDPSetFogColor")]
    SetFogColor,
    #[strum(serialize = "gsDPSetCombineMode")]
    SetCombineMode,
    #[strum(serialize = "gsDPSetCombineModeLERP")]
    SetCombineModeLerp,
    #[strum(serialize = "gsSPTexture")]
    Texture,
    #[strum(serialize = "gsDPSetTextureLUT")]
    SetTextureLut,
    #[strum(serialize = "gsDPPipeSync")]
    PipeSync,
    #[strum(serialize = "gsSPEndDisplayList")]
    EndDisplayList,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum CycleType {
    #[strum(serialize = "G_CYC_1CYCLE")]
    OneCycle,
    #[strum(serialize = "G_CYC_2CYCLE")]
    TwoCycle,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Open(String),
    Call { name: GbiMacro, arguments: String },
    Comment(String),
    Close,
}

impl Command {
    #[must_use]
    pub fn call(name: GbiMacro, arguments: impl Into<String>) -> Self {
        Command::Call { name, arguments: arguments.into() }
    }

    #[must_use]
    pub fn bare(name: GbiMacro) -> Self {
        Command::call(name, String::new())
    }

    #[must_use]
    pub fn one_triangle(corners: [u16; 3]) -> Self {
        Command::call(GbiMacro::OneTriangle, format!("{}, {}, {}, {NO_FLAG}", corners[0], corners[1], corners[2]))
    }

    #[must_use]
    pub fn two_triangles(corners: [u16; 6]) -> Self {
        Command::call(
            GbiMacro::TwoTriangles,
            format!(
                "{}, {}, {}, {NO_FLAG}, {}, {}, {}, {NO_FLAG}",
                corners[0], corners[1], corners[2], corners[3], corners[4], corners[5]
            ),
        )
    }

    #[must_use]
    pub fn vertex_load(buffer_label: &str, count: usize) -> Self {
        Command::call(GbiMacro::Vertex, format!("{buffer_label}, {count}, 0"))
    }

    #[must_use]
    pub fn set_geometry_mode(bits: GeometryMode) -> Self {
        Command::call(GbiMacro::SetGeometryMode, bits.gbi_expression())
    }

    #[must_use]
    pub fn clear_geometry_mode(bits: GeometryMode) -> Self {
        Command::call(GbiMacro::ClearGeometryMode, bits.gbi_expression())
    }

    #[must_use]
    pub fn cycle_type(cycle: CycleType) -> Self {
        Command::call(GbiMacro::SetCycleType, cycle.to_string())
    }

    #[must_use]
    pub fn render_mode(first_cycle: &str, second_cycle: &str) -> Self {
        Command::call(GbiMacro::SetRenderMode, format!("{first_cycle}, {second_cycle}"))
    }

    #[must_use]
    pub fn combine_mode(first_cycle: &str, second_cycle: &str) -> Self {
        Command::call(GbiMacro::SetCombineMode, format!("{first_cycle}, {second_cycle}"))
    }

    #[must_use]
    pub fn pipe_sync() -> Self {
        Command::bare(GbiMacro::PipeSync)
    }

    #[must_use]
    pub fn render(&self, format: ExportFormat) -> Option<String> {
        match (self, format) {
            (Command::Open(label), ExportFormat::Assembly) => Some(format!("glabel {label}")),
            (Command::Open(label), ExportFormat::C) => Some(format!("Gfx {label}[] = {{")),
            (Command::Call { name, arguments }, ExportFormat::Assembly) => {
                let name: &'static str = (*name).into();
                if arguments.is_empty() { Some(name.to_string()) } else { Some(format!("{name} {arguments}")) }
            }
            (Command::Call { name, arguments }, ExportFormat::C) => Some(format!("{C_INDENT}{name}({arguments}),")),
            (Command::Comment(text), ExportFormat::Assembly) => Some(format!("/* {text} */")),
            (Command::Comment(text), ExportFormat::C) => Some(format!("{C_INDENT}/* {text} */")),
            (Command::Close, ExportFormat::Assembly) => None,
            (Command::Close, ExportFormat::C) => Some("};".to_string()),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisplayList {
    commands: Vec<Command>,
}

impl DisplayList {
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn render(&self, format: ExportFormat) -> String {
        let mut text = String::new();
        for line in self.commands.iter().filter_map(|command| command.render(format)) {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}
