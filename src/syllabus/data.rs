//! The 30-day plan, English and Simplified Chinese

use super::models::DayPlan;

pub(super) const SYLLABUS_EN: [DayPlan; 30] = [
    // Phase 1: Introduction & Core Concepts
    DayPlan {
        day: 1,
        phase: "Foundation",
        title: "What is TOGAF?",
        description: "Understanding Enterprise Architecture and the TOGAF standard.",
        key_concepts: &["Enterprise Architecture", "TOGAF Standard", "Architecture Framework"],
    },
    DayPlan {
        day: 2,
        phase: "Foundation",
        title: "Core Concepts",
        description: "The Architecture Development Method (ADM), Deliverables, Artifacts, and Building Blocks.",
        key_concepts: &["ADM", "Deliverables", "Artifacts", "Building Blocks"],
    },
    DayPlan {
        day: 3,
        phase: "Foundation",
        title: "Key Terminology",
        description: "Stakeholders, Concerns, Views, Viewpoints, and the Enterprise Continuum.",
        key_concepts: &["Stakeholders", "Views vs Viewpoints", "Enterprise Continuum"],
    },
    DayPlan {
        day: 4,
        phase: "Foundation",
        title: "The ADM Cycle Overview",
        description: "High-level walkthrough of the ADM crop circle (Phases A-H).",
        key_concepts: &["ADM Cycle", "Requirements Management", "Phases Overview"],
    },
    DayPlan {
        day: 5,
        phase: "Foundation",
        title: "Architecture Governance",
        description: "Architecture Board, Compliance, and Contracts.",
        key_concepts: &["Governance", "Architecture Board", "Compliance"],
    },
    // Phase 2: The ADM Phases (The Meat)
    DayPlan {
        day: 6,
        phase: "ADM Execution",
        title: "Phase A: Architecture Vision",
        description: "Defining the scope, stakeholders, and high-level vision.",
        key_concepts: &[
            "Request for Architecture Work",
            "Statement of Architecture Work",
            "Stakeholder Map",
        ],
    },
    DayPlan {
        day: 7,
        phase: "ADM Execution",
        title: "Phase B: Business Architecture",
        description: "Defining the baseline and target business architecture.",
        key_concepts: &["Business Strategy", "Organization Map", "Business Functions"],
    },
    DayPlan {
        day: 8,
        phase: "ADM Execution",
        title: "Phase C: Information Systems - Data",
        description: "Data entities, logical and physical data models.",
        key_concepts: &["Data Architecture", "Data Entities", "Data Migration"],
    },
    DayPlan {
        day: 9,
        phase: "ADM Execution",
        title: "Phase C: Information Systems - Application",
        description: "Application map, interface catalog, and interoperability.",
        key_concepts: &["Application Portfolio", "Interface Catalog", "SaaS/PaaS"],
    },
    DayPlan {
        day: 10,
        phase: "ADM Execution",
        title: "Phase D: Technology Architecture",
        description: "Infrastructure, networks, and platform services.",
        key_concepts: &["Technology Portfolio", "Platform Services", "Hardware/Software"],
    },
    DayPlan {
        day: 11,
        phase: "ADM Execution",
        title: "Phase E: Opportunities & Solutions",
        description: "Roadmapping and initial implementation planning.",
        key_concepts: &["Gap Analysis", "Transition Architectures", "Implementation Factor Assessment"],
    },
    DayPlan {
        day: 12,
        phase: "ADM Execution",
        title: "Phase F: Migration Planning",
        description: "Detailed implementation and migration plan cost/benefit.",
        key_concepts: &["Migration Plan", "Business Value Assessment", "Cost Benefit Analysis"],
    },
    DayPlan {
        day: 13,
        phase: "ADM Execution",
        title: "Phase G: Implementation Governance",
        description: "Overseeing the build process to ensure compliance.",
        key_concepts: &["Governance", "Architecture Contract", "Compliance Review"],
    },
    DayPlan {
        day: 14,
        phase: "ADM Execution",
        title: "Phase H: Architecture Change Management",
        description: "Managing changes to the baseline.",
        key_concepts: &["Change Request", "Architecture Board", "Maintenance"],
    },
    DayPlan {
        day: 15,
        phase: "ADM Execution",
        title: "ADM Architecture Requirements Management",
        description: "Handling requirements throughout the ADM cycle.",
        key_concepts: &["Requirements Repository", "Traceability"],
    },
    // Phase 3: Guidelines & Techniques
    DayPlan {
        day: 16,
        phase: "Guidelines",
        title: "Iteration & Levels",
        description: "Applying ADM at different levels of granularity.",
        key_concepts: &["Iteration", "Strategic vs Segment vs Capability"],
    },
    DayPlan {
        day: 17,
        phase: "Guidelines",
        title: "Security Architecture",
        description: "Integrating security into the ADM.",
        key_concepts: &["Security Policy", "Risk Management"],
    },
    DayPlan {
        day: 18,
        phase: "Guidelines",
        title: "SOA & Microservices",
        description: "Using TOGAF with Service Oriented Architecture.",
        key_concepts: &["SOA", "Services", "Microservices"],
    },
    DayPlan {
        day: 19,
        phase: "Guidelines",
        title: "Architecture Patterns",
        description: "Using patterns to solve common problems.",
        key_concepts: &["Patterns", "Pattern Library"],
    },
    DayPlan {
        day: 20,
        phase: "Guidelines",
        title: "Interoperability",
        description: "Ensuring systems work together.",
        key_concepts: &["Interoperability Requirements", "Information Flow"],
    },
    // Phase 4: Content Framework & Metamodel
    DayPlan {
        day: 21,
        phase: "Content",
        title: "Content Metamodel",
        description: "The formal structure of architectural information.",
        key_concepts: &["Metamodel", "Core vs Extension"],
    },
    DayPlan {
        day: 22,
        phase: "Content",
        title: "Artifacts: Catalogs",
        description: "Lists of things (Actors, Roles, Applications).",
        key_concepts: &["Catalogs", "Lists"],
    },
    DayPlan {
        day: 23,
        phase: "Content",
        title: "Artifacts: Matrices",
        description: "Relationships between things (Actor/Role Matrix).",
        key_concepts: &["Matrices", "Interaction"],
    },
    DayPlan {
        day: 24,
        phase: "Content",
        title: "Artifacts: Diagrams",
        description: "Graphical representations.",
        key_concepts: &["Diagrams", "Visuals"],
    },
    DayPlan {
        day: 25,
        phase: "Content",
        title: "Building Blocks",
        description: "ABBs (Architecture) and SBBs (Solution).",
        key_concepts: &["ABB", "SBB", "Reusability"],
    },
    // Phase 5: Capability & Certification Prep
    DayPlan {
        day: 26,
        phase: "Capability",
        title: "Architecture Capability Framework",
        description: "Setting up the EA practice within an org.",
        key_concepts: &["Skills Framework", "Processes"],
    },
    DayPlan {
        day: 27,
        phase: "Capability",
        title: "Architecture Maturity Models",
        description: "Assessing the maturity of the EA practice.",
        key_concepts: &["CMMI", "Maturity Assessment"],
    },
    DayPlan {
        day: 28,
        phase: "Review",
        title: "Case Study Analysis",
        description: "Applying concepts to a fictional scenario.",
        key_concepts: &["Scenario", "Application"],
    },
    DayPlan {
        day: 29,
        phase: "Review",
        title: "Mock Exam - Part 1",
        description: "Foundational questions review.",
        key_concepts: &["Exam Prep", "Foundation"],
    },
    DayPlan {
        day: 30,
        phase: "Review",
        title: "Mock Exam - Part 2",
        description: "Certified scenario questions review.",
        key_concepts: &["Exam Prep", "Scenarios"],
    },
];

pub(super) const SYLLABUS_ZH: [DayPlan; 30] = [
    // Phase 1: Introduction & Core Concepts
    DayPlan {
        day: 1,
        phase: "基础",
        title: "什么是 TOGAF？",
        description: "理解企业架构和 TOGAF 标准。",
        key_concepts: &["企业架构", "TOGAF 标准", "架构框架"],
    },
    DayPlan {
        day: 2,
        phase: "基础",
        title: "核心概念",
        description: "架构开发方法 (ADM)、交付物、制品和构建块。",
        key_concepts: &["ADM", "交付物", "制品", "构建块"],
    },
    DayPlan {
        day: 3,
        phase: "基础",
        title: "关键术语",
        description: "利益相关者、关注点、视图、视点和企业连续体。",
        key_concepts: &["利益相关者", "视图与视点", "企业连续体"],
    },
    DayPlan {
        day: 4,
        phase: "基础",
        title: "ADM 周期概览",
        description: "ADM 麦田怪圈（阶段 A-H）的高层演练。",
        key_concepts: &["ADM 周期", "需求管理", "阶段概览"],
    },
    DayPlan {
        day: 5,
        phase: "基础",
        title: "架构治理",
        description: "架构委员会、合规性和合同。",
        key_concepts: &["治理", "架构委员会", "合规性"],
    },
    // Phase 2: The ADM Phases (The Meat)
    DayPlan {
        day: 6,
        phase: "ADM 执行",
        title: "阶段 A: 架构愿景",
        description: "定义范围、利益相关者和高层愿景。",
        key_concepts: &["架构工作请求", "架构工作说明书", "利益相关者图"],
    },
    DayPlan {
        day: 7,
        phase: "ADM 执行",
        title: "阶段 B: 业务架构",
        description: "定义基线和目标业务架构。",
        key_concepts: &["业务战略", "组织图", "业务功能"],
    },
    DayPlan {
        day: 8,
        phase: "ADM 执行",
        title: "阶段 C: 信息系统 - 数据",
        description: "数据实体、逻辑和物理数据模型。",
        key_concepts: &["数据架构", "数据实体", "数据迁移"],
    },
    DayPlan {
        day: 9,
        phase: "ADM 执行",
        title: "阶段 C: 信息系统 - 应用",
        description: "应用图、接口目录和互操作性。",
        key_concepts: &["应用组合", "接口目录", "SaaS/PaaS"],
    },
    DayPlan {
        day: 10,
        phase: "ADM 执行",
        title: "阶段 D: 技术架构",
        description: "基础设施、网络和平台服务。",
        key_concepts: &["技术组合", "平台服务", "硬件/软件"],
    },
    DayPlan {
        day: 11,
        phase: "ADM 执行",
        title: "阶段 E: 机会与解决方案",
        description: "路线图和初步实施规划。",
        key_concepts: &["差距分析", "过渡架构", "实施因素评估"],
    },
    DayPlan {
        day: 12,
        phase: "ADM 执行",
        title: "阶段 F: 迁移规划",
        description: "详细的实施和迁移计划成本/效益分析。",
        key_concepts: &["迁移计划", "业务价值评估", "成本效益分析"],
    },
    DayPlan {
        day: 13,
        phase: "ADM 执行",
        title: "阶段 G: 实施治理",
        description: "监督构建过程以确保合规性。",
        key_concepts: &["治理", "架构合同", "合规性审查"],
    },
    DayPlan {
        day: 14,
        phase: "ADM 执行",
        title: "阶段 H: 架构变更管理",
        description: "管理对基线的变更。",
        key_concepts: &["变更请求", "架构委员会", "维护"],
    },
    DayPlan {
        day: 15,
        phase: "ADM 执行",
        title: "ADM 架构需求管理",
        description: "在整个 ADM 周期中处理需求。",
        key_concepts: &["需求库", "可追溯性"],
    },
    // Phase 3: Guidelines & Techniques
    DayPlan {
        day: 16,
        phase: "指南",
        title: "迭代与层级",
        description: "在不同粒度级别应用 ADM。",
        key_concepts: &["迭代", "战略 vs 分段 vs 能力"],
    },
    DayPlan {
        day: 17,
        phase: "指南",
        title: "安全架构",
        description: "将安全性集成到 ADM 中。",
        key_concepts: &["安全策略", "风险管理"],
    },
    DayPlan {
        day: 18,
        phase: "指南",
        title: "SOA 与微服务",
        description: "在面向服务的架构中使用 TOGAF。",
        key_concepts: &["SOA", "服务", "微服务"],
    },
    DayPlan {
        day: 19,
        phase: "指南",
        title: "架构模式",
        description: "使用模式解决常见问题。",
        key_concepts: &["模式", "模式库"],
    },
    DayPlan {
        day: 20,
        phase: "指南",
        title: "互操作性",
        description: "确保系统协同工作。",
        key_concepts: &["互操作性需求", "信息流"],
    },
    // Phase 4: Content Framework & Metamodel
    DayPlan {
        day: 21,
        phase: "内容",
        title: "内容元模型",
        description: "架构信息的正式结构。",
        key_concepts: &["元模型", "核心 vs 扩展"],
    },
    DayPlan {
        day: 22,
        phase: "内容",
        title: "制品: 目录",
        description: "事物列表（参与者、角色、应用程序）。",
        key_concepts: &["目录", "列表"],
    },
    DayPlan {
        day: 23,
        phase: "内容",
        title: "制品: 矩阵",
        description: "事物之间的关系（参与者/角色矩阵）。",
        key_concepts: &["矩阵", "交互"],
    },
    DayPlan {
        day: 24,
        phase: "内容",
        title: "制品: 图表",
        description: "图形表示。",
        key_concepts: &["图表", "视觉化"],
    },
    DayPlan {
        day: 25,
        phase: "内容",
        title: "构建块",
        description: "ABB（架构）和 SBB（解决方案）。",
        key_concepts: &["ABB", "SBB", "可重用性"],
    },
    // Phase 5: Capability & Certification Prep
    DayPlan {
        day: 26,
        phase: "能力",
        title: "架构能力框架",
        description: "在组织内建立 EA 实践。",
        key_concepts: &["技能框架", "流程"],
    },
    DayPlan {
        day: 27,
        phase: "能力",
        title: "架构成熟度模型",
        description: "评估 EA 实践的成熟度。",
        key_concepts: &["CMMI", "成熟度评估"],
    },
    DayPlan {
        day: 28,
        phase: "复习",
        title: "案例分析",
        description: "将概念应用于虚构场景。",
        key_concepts: &["场景", "应用"],
    },
    DayPlan {
        day: 29,
        phase: "复习",
        title: "模拟考试 - 第 1 部分",
        description: "基础问题复习。",
        key_concepts: &["备考", "基础"],
    },
    DayPlan {
        day: 30,
        phase: "复习",
        title: "模拟考试 - 第 2 部分",
        description: "认证场景问题复习。",
        key_concepts: &["备考", "场景"],
    },
];
