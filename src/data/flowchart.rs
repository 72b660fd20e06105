//! Built-in flowchart content: examples ordered from beginner to advanced,
//! plus the syntax-reference table.

use crate::models::{Category, DiagramStatus, DiagramType, Example, Level, SyntaxEntry};

fn examples() -> Vec<Example> {
    vec![
        Example {
            id: "flowchart-basic".to_string(),
            title: "Basic Flowchart".to_string(),
            description: "Simple flowchart showing a linear process".to_string(),
            level: Some(Level::Beginner),
            code: "flowchart TD
    A[Start] --> B[Process]
    B --> C[Decision]
    C --> D[End]"
                .to_string(),
            tags: Some(vec![
                "basic".to_string(),
                "linear".to_string(),
                "simple".to_string(),
            ]),
        },
        Example {
            id: "flowchart-decision".to_string(),
            title: "Decision Flow".to_string(),
            description: "Flowchart with conditional branches".to_string(),
            level: Some(Level::Beginner),
            code: "flowchart TD
    A[Start] --> B{Is it working?}
    B -->|Yes| C[Great!]
    B -->|No| D[Debug]
    D --> B
    C --> E[End]"
                .to_string(),
            tags: Some(vec![
                "decision".to_string(),
                "conditional".to_string(),
                "loop".to_string(),
            ]),
        },
        Example {
            id: "flowchart-shapes".to_string(),
            title: "Different Node Shapes".to_string(),
            description: "Demonstrates various node shapes available".to_string(),
            level: Some(Level::Beginner),
            code: "flowchart LR
    A[Rectangle] --> B(Rounded)
    B --> C([Stadium])
    C --> D[[Subroutine]]
    D --> E[(Database)]
    E --> F((Circle))"
                .to_string(),
            tags: Some(vec![
                "shapes".to_string(),
                "nodes".to_string(),
                "styles".to_string(),
            ]),
        },
        Example {
            id: "flowchart-development".to_string(),
            title: "Software Development Process".to_string(),
            description: "Real-world example of a development workflow".to_string(),
            level: Some(Level::Intermediate),
            code: "flowchart TD
    A[Write Code] --> B{Tests Pass?}
    B -->|No| C[Fix Bugs]
    C --> A
    B -->|Yes| D[Code Review]
    D --> E{Approved?}
    E -->|No| F[Address Feedback]
    F --> A
    E -->|Yes| G[Merge to Main]
    G --> H[Deploy]"
                .to_string(),
            tags: Some(vec![
                "workflow".to_string(),
                "development".to_string(),
                "real-world".to_string(),
            ]),
        },
        Example {
            id: "flowchart-subgraphs".to_string(),
            title: "Subgraphs for Organization".to_string(),
            description: "Using subgraphs to group related nodes".to_string(),
            level: Some(Level::Intermediate),
            code: "flowchart TB
    A[User Request] --> B[API Gateway]

    subgraph Backend
        B --> C[Authentication]
        C --> D[Business Logic]
        D --> E[Database]
    end

    E --> F[Response]
    F --> A"
                .to_string(),
            tags: Some(vec![
                "subgraph".to_string(),
                "organization".to_string(),
                "architecture".to_string(),
            ]),
        },
        Example {
            id: "flowchart-styling".to_string(),
            title: "Styled Nodes".to_string(),
            description: "Custom styling with CSS classes".to_string(),
            level: Some(Level::Intermediate),
            code: "flowchart LR
    A[Normal] --> B[Success]
    A --> C[Warning]
    A --> D[Error]

    classDef successClass fill:#90EE90,stroke:#2E7D32
    classDef warningClass fill:#FFE082,stroke:#F57C00
    classDef errorClass fill:#FFCDD2,stroke:#C62828

    class B successClass
    class C warningClass
    class D errorClass"
                .to_string(),
            tags: Some(vec![
                "styling".to_string(),
                "css".to_string(),
                "colors".to_string(),
            ]),
        },
        Example {
            id: "flowchart-complex".to_string(),
            title: "E-commerce Checkout Flow".to_string(),
            description: "Complex real-world flowchart with multiple paths".to_string(),
            level: Some(Level::Advanced),
            code: "flowchart TD
    Start([Customer Starts Checkout]) --> Cart{Cart Empty?}
    Cart -->|Yes| End1[Show Error]
    Cart -->|No| Login{Logged In?}

    Login -->|No| Register[Register/Login]
    Register --> Login
    Login -->|Yes| Address[Enter Shipping Address]

    Address --> Shipping{Shipping Method}
    Shipping -->|Standard| Pay1[Payment]
    Shipping -->|Express| Pay2[Payment + Express Fee]

    Pay1 --> Process
    Pay2 --> Process

    Process{Payment Success?}
    Process -->|No| Retry{Retry?}
    Retry -->|Yes| Pay1
    Retry -->|No| End2[Order Cancelled]

    Process -->|Yes| Confirm[Order Confirmation]
    Confirm --> Email[Send Email]
    Email --> End3([Complete])"
                .to_string(),
            tags: Some(vec![
                "complex".to_string(),
                "ecommerce".to_string(),
                "real-world".to_string(),
                "multiple-paths".to_string(),
            ]),
        },
        Example {
            id: "flowchart-directions".to_string(),
            title: "Flow Directions".to_string(),
            description: "Different flow orientations (TD, LR, RL, BT)".to_string(),
            level: Some(Level::Beginner),
            code: "flowchart LR
    subgraph TB1[Top to Bottom]
        direction TB
        A1[Top] --> A2[Bottom]
    end

    subgraph LR1[Left to Right]
        direction LR
        B1[Left] --> B2[Right]
    end

    TB1 --> LR1"
                .to_string(),
            tags: Some(vec![
                "direction".to_string(),
                "orientation".to_string(),
                "layout".to_string(),
            ]),
        },
    ]
}

fn syntax() -> Vec<SyntaxEntry> {
    fn entry(syntax: &str, description: &str, example: &str, notes: &str) -> SyntaxEntry {
        SyntaxEntry {
            syntax: syntax.to_string(),
            description: description.to_string(),
            example: example.to_string(),
            notes: Some(notes.to_string()),
        }
    }

    vec![
        entry(
            "flowchart TD",
            "Define flowchart direction (TD = Top Down)",
            "flowchart TD",
            "Other options: TB, BT, RL, LR",
        ),
        entry(
            "A[Text]",
            "Rectangle node with text",
            "A[Process Step]",
            "Most common node shape",
        ),
        entry(
            "A(Text)",
            "Rounded rectangle node",
            "A(Rounded Process)",
            "Softer appearance",
        ),
        entry(
            "A([Text])",
            "Stadium-shaped node",
            "A([Start/End])",
            "Often used for start/end",
        ),
        entry(
            "A[[Text]]",
            "Subroutine/subprocess node",
            "A[[Subroutine]]",
            "Double vertical lines",
        ),
        entry(
            "A[(Text)]",
            "Database/cylinder node",
            "A[(Database)]",
            "For data storage",
        ),
        entry(
            "A((Text))",
            "Circle node",
            "A((Circle))",
            "For connection points",
        ),
        entry(
            "A{Text}",
            "Diamond/decision node",
            "A{Is Valid?}",
            "For yes/no decisions",
        ),
        entry(
            "A{{Text}}",
            "Hexagon node",
            "A{{Hexagon}}",
            "For preparation steps",
        ),
        entry(
            "A[/Text/]",
            "Parallelogram (input/output)",
            "A[/Input Data/]",
            "Slanted right",
        ),
        entry(
            "A[\\Text\\]",
            "Parallelogram (alternate)",
            "A[\\Output Data\\]",
            "Slanted left",
        ),
        entry(
            "A -->|label| B",
            "Arrow with label",
            "A -->|Yes| B",
            "Shows condition/action",
        ),
        entry(
            "A --- B",
            "Line without arrow",
            "A --- B",
            "Non-directional link",
        ),
        entry(
            "A -.-> B",
            "Dotted arrow",
            "A -.-> B",
            "For optional/weak connections",
        ),
        entry("A ==> B", "Thick arrow", "A ==> B", "For emphasis"),
        entry(
            "subgraph Title",
            "Create a subgraph container",
            "subgraph Backend\\n...\\nend",
            "Groups related nodes",
        ),
        entry(
            "classDef className",
            "Define CSS class for styling",
            "classDef red fill:#f00",
            "Apply with: class A className",
        ),
        entry(
            "class A,B className",
            "Apply style class to nodes",
            "class A,B redClass",
            "Multiple nodes separated by commas",
        ),
        entry(
            "style A fill:#f00",
            "Inline style for single node",
            "style A fill:#f9f,stroke:#333",
            "Direct CSS styling",
        ),
        entry(
            "click A callback",
            "Add click interaction (web only)",
            "click A \"https://example.com\"",
            "Requires securityLevel: loose",
        ),
    ]
}

/// The complete flowchart diagram type.
pub fn flowchart() -> DiagramType {
    DiagramType {
        id: "flowchart".to_string(),
        name: "Flowchart".to_string(),
        category: Category::Flow,
        description: "Visualize processes, workflows, and decision trees".to_string(),
        detailed_description: Some(
            "Flowcharts are diagrams that represent workflows or processes. They use \
             different shapes to represent different types of steps and arrows to show \
             the flow of execution. Flowcharts are ideal for documenting algorithms, \
             business processes, troubleshooting guides, and decision-making flows."
                .to_string(),
        ),
        icon: Some("🔄".to_string()),
        examples: examples(),
        syntax: syntax(),
        docs_url: Some("https://mermaid.js.org/syntax/flowchart.html".to_string()),
        use_cases: Some(vec![
            "Algorithm visualization".to_string(),
            "Business process documentation".to_string(),
            "Decision trees and troubleshooting guides".to_string(),
            "System workflows and user journeys".to_string(),
            "Software development processes".to_string(),
            "Onboarding and training materials".to_string(),
        ]),
        tips: Some(vec![
            "Use consistent node shapes for similar types of steps".to_string(),
            "Keep flowcharts focused - break complex flows into multiple diagrams".to_string(),
            "Label decision branches clearly (Yes/No, True/False)".to_string(),
            "Use subgraphs to organize related steps".to_string(),
            "Consider left-to-right (LR) for wide screens".to_string(),
            "Avoid crossing arrows when possible for clarity".to_string(),
        ]),
        status: DiagramStatus::Stable,
    }
}
