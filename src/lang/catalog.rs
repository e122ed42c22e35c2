//! Built-in language configurations.
//!
//! Each function returns a fresh, immutable [`LanguageConfig`]. Python is the
//! documented fallback: requesting an unregistered language generates Python.

use super::config::{LanguageConfig, OperatorTemplates, StatementTemplates};

fn default_operators() -> OperatorTemplates {
    OperatorTemplates {
        add: "({a} + {b})".to_string(),
        subtract: "({a} - {b})".to_string(),
        multiply: "({a} * {b})".to_string(),
        divide: "({a} / {b})".to_string(),
        modulo: "({a} % {b})".to_string(),
        and: "({a} && {b})".to_string(),
        or: "({a} || {b})".to_string(),
        equal: "({a} == {b})".to_string(),
        not_equal: "({a} != {b})".to_string(),
        greater: "({a} > {b})".to_string(),
        greater_eq: "({a} >= {b})".to_string(),
        less: "({a} < {b})".to_string(),
        less_eq: "({a} <= {b})".to_string(),
        not: Some("(!{value})".to_string()),
    }
}

fn c_style_escapes() -> Vec<(char, String)> {
    vec![
        ('\\', "\\\\".to_string()),
        ('"', "\\\"".to_string()),
        ('\n', "\\n".to_string()),
        ('\t', "\\t".to_string()),
        ('\r', "\\r".to_string()),
    ]
}

pub fn python() -> LanguageConfig {
    LanguageConfig {
        name: "python".to_string(),
        file_extension: "py".to_string(),
        syntax: "python".to_string(),
        line_comment: "# {text}".to_string(),
        block_comment: Some(("\"\"\"".to_string(), "\"\"\"".to_string())),
        statements: StatementTemplates {
            if_header: "if {condition}:".to_string(),
            else_header: "else:".to_string(),
            for_header: "for {var} in range({start}, {end}):".to_string(),
            while_header: "while {condition}:".to_string(),
            function_def: "def {name}({params}):".to_string(),
            function_call: "{name}({args})".to_string(),
            return_statement: "return {value}".to_string(),
            variable_def: "{name} = {value}".to_string(),
            assignment: "{name} = {value}".to_string(),
            print: "print({value})".to_string(),
            input: "{name} = input({prompt})".to_string(),
        },
        operators: OperatorTemplates {
            and: "({a} and {b})".to_string(),
            or: "({a} or {b})".to_string(),
            modulo: "({a} % {b})".to_string(),
            not: Some("(not {value})".to_string()),
            ..default_operators()
        },
        indent_unit: "    ".to_string(),
        terminator: String::new(),
        block_start: None,
        block_end: None,
        true_literal: "True".to_string(),
        false_literal: "False".to_string(),
        null_literal: "None".to_string(),
        string_quote: '"',
        escapes: c_style_escapes(),
        headers: Vec::new(),
        footers: Vec::new(),
    }
}

pub fn javascript() -> LanguageConfig {
    LanguageConfig {
        name: "javascript".to_string(),
        file_extension: "js".to_string(),
        syntax: "javascript".to_string(),
        line_comment: "// {text}".to_string(),
        block_comment: Some(("/*".to_string(), "*/".to_string())),
        statements: StatementTemplates {
            if_header: "if ({condition}) {".to_string(),
            else_header: "} else {".to_string(),
            for_header: "for (let {var} = {start}; {var} < {end}; {var}++) {".to_string(),
            while_header: "while ({condition}) {".to_string(),
            function_def: "function {name}({params}) {".to_string(),
            function_call: "{name}({args})".to_string(),
            return_statement: "return {value}".to_string(),
            variable_def: "let {name} = {value}".to_string(),
            assignment: "{name} = {value}".to_string(),
            print: "console.log({value})".to_string(),
            input: "const {name} = prompt({prompt})".to_string(),
        },
        operators: default_operators(),
        indent_unit: "  ".to_string(),
        terminator: ";".to_string(),
        block_start: None,
        block_end: Some("}".to_string()),
        true_literal: "true".to_string(),
        false_literal: "false".to_string(),
        null_literal: "null".to_string(),
        string_quote: '"',
        escapes: c_style_escapes(),
        headers: Vec::new(),
        footers: Vec::new(),
    }
}

pub fn lua() -> LanguageConfig {
    LanguageConfig {
        name: "lua".to_string(),
        file_extension: "lua".to_string(),
        syntax: "lua".to_string(),
        line_comment: "-- {text}".to_string(),
        block_comment: Some(("--[[".to_string(), "]]".to_string())),
        statements: StatementTemplates {
            if_header: "if {condition} then".to_string(),
            else_header: "else".to_string(),
            // Lua's numeric for is end-inclusive; subtracting one keeps the
            // iteration count identical across the catalog.
            for_header: "for {var} = {start}, {end} - 1 do".to_string(),
            while_header: "while {condition} do".to_string(),
            function_def: "function {name}({params})".to_string(),
            function_call: "{name}({args})".to_string(),
            return_statement: "return {value}".to_string(),
            variable_def: "local {name} = {value}".to_string(),
            assignment: "{name} = {value}".to_string(),
            print: "print({value})".to_string(),
            input: "local {name} = io.read()".to_string(),
        },
        operators: OperatorTemplates {
            and: "({a} and {b})".to_string(),
            or: "({a} or {b})".to_string(),
            not_equal: "({a} ~= {b})".to_string(),
            not: Some("(not {value})".to_string()),
            ..default_operators()
        },
        indent_unit: "    ".to_string(),
        terminator: String::new(),
        block_start: None,
        block_end: Some("end".to_string()),
        true_literal: "true".to_string(),
        false_literal: "false".to_string(),
        null_literal: "nil".to_string(),
        string_quote: '"',
        escapes: c_style_escapes(),
        headers: Vec::new(),
        footers: Vec::new(),
    }
}

pub fn ruby() -> LanguageConfig {
    LanguageConfig {
        name: "ruby".to_string(),
        file_extension: "rb".to_string(),
        syntax: "ruby".to_string(),
        line_comment: "# {text}".to_string(),
        block_comment: Some(("=begin".to_string(), "=end".to_string())),
        statements: StatementTemplates {
            if_header: "if {condition}".to_string(),
            else_header: "else".to_string(),
            for_header: "for {var} in {start}...{end} do".to_string(),
            while_header: "while {condition} do".to_string(),
            function_def: "def {name}({params})".to_string(),
            function_call: "{name}({args})".to_string(),
            return_statement: "return {value}".to_string(),
            variable_def: "{name} = {value}".to_string(),
            assignment: "{name} = {value}".to_string(),
            print: "puts({value})".to_string(),
            input: "{name} = gets.chomp".to_string(),
        },
        operators: default_operators(),
        indent_unit: "  ".to_string(),
        terminator: String::new(),
        block_start: None,
        block_end: Some("end".to_string()),
        true_literal: "true".to_string(),
        false_literal: "false".to_string(),
        null_literal: "nil".to_string(),
        string_quote: '"',
        escapes: c_style_escapes(),
        headers: Vec::new(),
        footers: Vec::new(),
    }
}
