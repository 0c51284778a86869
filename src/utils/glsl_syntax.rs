use egui_code_editor::Syntax;
use std::collections::BTreeSet;

/// GLSL 3.30 highlighting for the code editor
pub fn glsl() -> Syntax {
    Syntax::new("glsl")
        .with_case_sensitive(true)
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords(BTreeSet::from([
            "attribute", "break", "case", "centroid", "const", "continue", "default",
            "discard", "do", "else", "flat", "for", "highp", "if", "in", "inout",
            "invariant", "layout", "location", "lowp", "mediump", "noperspective",
            "out", "precision", "return", "smooth", "struct", "switch", "uniform",
            "varying", "while", "#version", "#define", "#ifdef", "#ifndef", "#endif",
            "core",
        ]))
        .with_types(BTreeSet::from([
            "void", "bool", "int", "uint", "float", "double",
            "vec2", "vec3", "vec4", "ivec2", "ivec3", "ivec4",
            "uvec2", "uvec3", "uvec4", "bvec2", "bvec3", "bvec4",
            "mat2", "mat3", "mat4", "mat2x2", "mat3x3", "mat4x4",
            "sampler2D", "sampler3D", "samplerCube",
        ]))
        .with_special(BTreeSet::from([
            "gl_FragCoord", "gl_FragColor", "gl_Position", "gl_PointCoord",
            "time", "resolution", "mouse", "main",
            "abs", "clamp", "cos", "cross", "distance", "dot", "exp", "floor", "fract",
            "length", "log", "max", "min", "mix", "mod", "normalize", "pow",
            "reflect", "sign", "sin", "smoothstep", "sqrt", "step", "tan", "texture",
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glsl_syntax_sets() {
        let syntax = glsl();
        assert!(syntax.is_keyword("uniform"));
        assert!(syntax.is_type("vec4"));
        assert!(syntax.is_special("resolution"));
        assert!(!syntax.is_keyword("fragColor"));
    }
}
