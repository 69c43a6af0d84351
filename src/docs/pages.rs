// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/docs/pages.rs - 文档页面内容
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Outfit Guru Team <hello@outfitguru.com>

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
  Info,
  Warning,
  Error,
  Success,
  Tip,
}

impl CalloutKind {
  pub fn icon(&self) -> &'static str {
    match self {
      CalloutKind::Info => "ℹ️",
      CalloutKind::Warning => "⚠️",
      CalloutKind::Error => "❌",
      CalloutKind::Success => "✅",
      CalloutKind::Tip => "💡",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
  pub title: &'static str,
  pub body: &'static str,
  pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
  Heading(&'static str),
  Subheading(&'static str),
  Paragraph(&'static str),
  Bullets(&'static [&'static str]),
  Steps(&'static [&'static str]),
  Image {
    alt: &'static str,
    caption: &'static str,
  },
  Code {
    language: &'static str,
    filename: Option<&'static str>,
    body: &'static str,
  },
  Callout {
    kind: CalloutKind,
    title: Option<&'static str>,
    body: &'static str,
  },
  Cards(&'static [Card]),
  Table {
    header: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
  },
}

impl fmt::Display for Block {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Block::Heading(text) => writeln!(f, "\n## {}", text),
      Block::Subheading(text) => writeln!(f, "\n### {}", text),
      Block::Paragraph(text) => writeln!(f, "{}", text),
      Block::Bullets(items) => items.iter().try_for_each(|item| writeln!(f, "  • {}", item)),
      Block::Steps(items) => items
        .iter()
        .enumerate()
        .try_for_each(|(i, item)| writeln!(f, "  {}. {}", i + 1, item)),
      Block::Image { alt, caption } => writeln!(f, "[image: {}] {}", alt, caption),
      Block::Code {
        language,
        filename,
        body,
      } => {
        match filename {
          Some(name) => writeln!(f, "```{} ({})", language, name)?,
          None => writeln!(f, "```{}", language)?,
        }
        writeln!(f, "{}", body)?;
        writeln!(f, "```")
      }
      Block::Callout { kind, title, body } => {
        match title {
          Some(title) => writeln!(f, "{} {}", kind.icon(), title)?,
          None => write!(f, "{} ", kind.icon())?,
        }
        writeln!(f, "{}", body)
      }
      Block::Cards(cards) => cards.iter().try_for_each(|card| {
        match card.href {
          Some(href) => writeln!(f, "  {} -> {}", card.title, href)?,
          None => writeln!(f, "  {}", card.title)?,
        }
        writeln!(f, "     {}", card.body)
      }),
      Block::Table { header, rows } => {
        writeln!(f, "| {} |", header.join(" | "))?;
        writeln!(f, "|{}", "---|".repeat(header.len()))?;
        rows
          .iter()
          .try_for_each(|row| writeln!(f, "| {} |", row.join(" | ")))
      }
    }
  }
}

/// 有完整内容的文档页
#[derive(Debug, PartialEq, Eq)]
pub struct Article {
  pub title: &'static str,
  pub lead: &'static str,
  pub blocks: &'static [Block],
}

pub const PLACEHOLDER_BODY: &str = "📝 This documentation section is currently under development. \
                                    Check back soon for comprehensive guides and examples!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocPage {
  Article(&'static Article),
  Placeholder {
    title: &'static str,
    description: &'static str,
  },
  NotFound(String),
}

impl DocPage {
  pub fn title(&self) -> &str {
    match self {
      DocPage::Article(article) => article.title,
      DocPage::Placeholder { title, .. } => title,
      DocPage::NotFound(_) => "Page Not Found",
    }
  }

  pub fn description(&self) -> &str {
    match self {
      DocPage::Article(article) => article.lead,
      DocPage::Placeholder { description, .. } => description,
      DocPage::NotFound(_) => "The documentation page you're looking for doesn't exist.",
    }
  }
}

impl fmt::Display for DocPage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# {}", self.title())?;
    writeln!(f, "{}", self.description())?;
    match self {
      DocPage::Article(article) => article
        .blocks
        .iter()
        .try_for_each(|block| write!(f, "{}", block)),
      DocPage::Placeholder { .. } => writeln!(f, "\n{}", PLACEHOLDER_BODY),
      DocPage::NotFound(path) => writeln!(
        f,
        "\n🔍 The page \"{}\" could not be found. Please check the URL or navigate back to the \
         documentation home.",
        path
      ),
    }
  }
}

pub static INTRODUCTION: Article = Article {
  title: "Welcome to Outfit Guru",
  lead: "AI-powered outfit detection and style analysis platform",
  blocks: &[
    Block::Image {
      alt: "Outfit Guru Dashboard",
      caption: "Outfit Guru's intuitive interface for outfit detection and analysis",
    },
    Block::Heading("What is Outfit Guru?"),
    Block::Paragraph(
      "Outfit Guru is a comprehensive AI-powered platform that revolutionizes how we analyze and \
       understand fashion choices. Built with cutting-edge computer vision and machine learning \
       technologies, it provides intelligent outfit detection, style analysis, and personalized \
       recommendations.",
    ),
    Block::Heading("Key Features"),
    Block::Cards(&[
      Card {
        title: "🔍 AI Outfit Detection",
        body: "Advanced YOLO-based computer vision models to detect and classify clothing items \
               with high accuracy.",
        href: None,
      },
      Card {
        title: "🎨 Style Analysis",
        body: "Comprehensive style analysis powered by large language models to understand \
               fashion trends and aesthetics.",
        href: None,
      },
      Card {
        title: "🔒 Privacy Protection",
        body: "Built-in face blurring technology to protect user privacy while maintaining \
               outfit analysis accuracy.",
        href: None,
      },
      Card {
        title: "💡 Smart Recommendations",
        body: "Personalized outfit suggestions based on detected items, style preferences, and \
               current fashion trends.",
        href: None,
      },
    ]),
    Block::Heading("Technology Stack"),
    Block::Table {
      header: &["Frontend", "Backend", "AI/ML"],
      rows: &[
        &["React + TypeScript", "FastAPI + Python", "YOLOv8"],
        &["Tailwind CSS", "PyTorch", "LLM Integration"],
        &["Vite", "OpenCV", "Computer Vision"],
      ],
    },
    Block::Callout {
      kind: CalloutKind::Tip,
      title: Some("Quick Start"),
      body: "Ready to get started? Check out our Installation Guide (/docs/installation) to set \
             up Outfit Guru locally, or jump straight to the Quick Start (/docs/quick-start) \
             tutorial.",
    },
    Block::Heading("Quick Example"),
    Block::Paragraph("Here's a simple example of how to use Outfit Guru's API:"),
    Block::Code {
      language: "python",
      filename: Some("example.py"),
      body: r#"import requests

# Upload an image for outfit detection
url = "http://localhost:8000/api/detect-outfit"
files = {"file": open("outfit_image.jpg", "rb")}

response = requests.post(url, files=files)
result = response.json()

print(f"Detected items: {result['detected_items']}")
print(f"Style analysis: {result['style_analysis']}")"#,
    },
    Block::Callout {
      kind: CalloutKind::Info,
      title: None,
      body: "This is just a basic example. Outfit Guru provides many more features including \
             batch processing, style recommendations, and advanced analytics. Explore the \
             documentation to learn more!",
    },
    Block::Heading("Next Steps"),
    Block::Cards(&[
      Card {
        title: "📦 Installation",
        body: "Set up Outfit Guru on your local machine or server",
        href: Some("/docs/installation"),
      },
      Card {
        title: "🚀 Quick Start",
        body: "Get up and running with your first outfit detection",
        href: Some("/docs/quick-start"),
      },
      Card {
        title: "📖 API Reference",
        body: "Comprehensive API documentation and examples",
        href: Some("/docs/api/backend"),
      },
      Card {
        title: "🧩 Components",
        body: "Reusable UI components and design system",
        href: Some("/docs/components"),
      },
    ]),
  ],
};

pub static INSTALLATION: Article = Article {
  title: "Installation",
  lead: "Get Outfit Guru running on your local machine or server",
  blocks: &[
    Block::Callout {
      kind: CalloutKind::Info,
      title: Some("Prerequisites"),
      body: "Before you begin, ensure you have the following installed:\n  • Python 3.8 or \
             higher\n  • Node.js 16 or higher\n  • Git\n  • At least 8GB of RAM (recommended)\n  \
             • GPU with CUDA support (optional, for faster processing)",
    },
    Block::Heading("Clone the Repository"),
    Block::Paragraph("First, clone the Outfit Guru repository from GitHub:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: "git clone https://github.com/aman-kumar-27d/Outfit-Guru.git\ncd Outfit-Guru",
    },
    Block::Heading("Backend Setup"),
    Block::Subheading("1. Python Environment"),
    Block::Paragraph("Create and activate a virtual environment:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: r"# Create virtual environment
python -m venv outfit-guru-env

# Activate virtual environment
# On Windows
outfit-guru-env\Scripts\activate
# On macOS/Linux
source outfit-guru-env/bin/activate",
    },
    Block::Subheading("2. Install Dependencies"),
    Block::Paragraph("Navigate to the backend directory and install Python dependencies:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: "cd backend\npip install -r requirements.txt",
    },
    Block::Callout {
      kind: CalloutKind::Warning,
      title: Some("CUDA Support"),
      body: "If you have a CUDA-compatible GPU and want to enable GPU acceleration, install the \
             CUDA version of PyTorch:\npip install torch torchvision torchaudio --index-url \
             https://download.pytorch.org/whl/cu118",
    },
    Block::Subheading("3. Download Model Weights"),
    Block::Paragraph(
      "The YOLO models are already included in the `weights/` directory. If you need to download \
       additional or updated models:",
    ),
    Block::Code {
      language: "bash",
      filename: None,
      body: r"# Create weights directory if it doesn't exist
mkdir -p weights

# Download YOLOv8 models (optional - already included)
# wget https://github.com/ultralytics/assets/releases/download/v0.0.0/yolov8n.pt -O weights/yolov8n.pt
# wget https://github.com/ultralytics/assets/releases/download/v0.0.0/yolov8s.pt -O weights/yolov8s.pt",
    },
    Block::Subheading("4. Environment Variables"),
    Block::Paragraph("Create a `.env` file in the backend directory:"),
    Block::Code {
      language: "bash",
      filename: Some("backend/.env"),
      body: r"# API Configuration
API_HOST=localhost
API_PORT=8000
DEBUG=True

# Model Configuration
MODEL_PATH=weights/yolov8s.pt
CONFIDENCE_THRESHOLD=0.5
IOU_THRESHOLD=0.4

# Upload Configuration
UPLOAD_DIR=../blurred_uploads
MAX_FILE_SIZE=10485760  # 10MB

# LLM Configuration (Optional)
PERPLEXITY_API_KEY=your_perplexity_api_key_here
OPENAI_API_KEY=your_openai_api_key_here

# CORS Configuration
CORS_ORIGINS=http://localhost:3000,http://localhost:5173",
    },
    Block::Heading("Frontend Setup"),
    Block::Subheading("1. Install Dependencies"),
    Block::Paragraph("Navigate to the frontend directory and install Node.js dependencies:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: "cd ../frontend/Outfit-Guru\nnpm install",
    },
    Block::Subheading("2. Environment Configuration"),
    Block::Paragraph("Create a `.env` file in the frontend directory:"),
    Block::Code {
      language: "bash",
      filename: Some("frontend/Outfit-Guru/.env"),
      body: r"# API Configuration
VITE_API_BASE_URL=http://localhost:8000
VITE_API_TIMEOUT=30000

# Development Configuration
VITE_DEV_MODE=true
VITE_ENABLE_LOGS=true",
    },
    Block::Heading("Running the Application"),
    Block::Subheading("1. Start the Backend Server"),
    Block::Paragraph("In the backend directory, start the FastAPI server:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: "cd backend\nuvicorn main:app --reload --host 0.0.0.0 --port 8000",
    },
    Block::Paragraph("The backend API will be available at `http://localhost:8000`"),
    Block::Subheading("2. Start the Frontend Development Server"),
    Block::Paragraph(
      "In a new terminal, navigate to the frontend directory and start the development server:",
    ),
    Block::Code {
      language: "bash",
      filename: None,
      body: "cd frontend/Outfit-Guru\nnpm run dev",
    },
    Block::Paragraph("The frontend will be available at `http://localhost:5173`"),
    Block::Callout {
      kind: CalloutKind::Success,
      title: Some("Success!"),
      body: "If both servers start successfully, you should be able to access the Outfit Guru \
             application at http://localhost:5173 and the API documentation at \
             http://localhost:8000/docs.",
    },
    Block::Heading("Docker Installation (Alternative)"),
    Block::Paragraph(
      "For a simpler setup process, you can use Docker to run both the frontend and backend:",
    ),
    Block::Code {
      language: "bash",
      filename: Some("docker-compose.yml"),
      body: r#"version: '3.8'
services:
  backend:
    build:
      context: ./backend
      dockerfile: Dockerfile
    ports:
      - "8000:8000"
    environment:
      - API_HOST=0.0.0.0
      - API_PORT=8000
    volumes:
      - ./blurred_uploads:/app/blurred_uploads
      - ./data:/app/data

  frontend:
    build:
      context: ./frontend/Outfit-Guru
      dockerfile: Dockerfile
    ports:
      - "3000:3000"
    environment:
      - VITE_API_BASE_URL=http://localhost:8000
    depends_on:
      - backend"#,
    },
    Block::Code {
      language: "bash",
      filename: None,
      body: "# Build and run with Docker Compose\ndocker-compose up --build\n\n# Run in \
             background\ndocker-compose up -d --build",
    },
    Block::Heading("Troubleshooting"),
    Block::Callout {
      kind: CalloutKind::Warning,
      title: Some("Common Issues"),
      body: "Port already in use: If you get a \"port already in use\" error, either kill the \
             process using the port or change the port in your configuration files.\nCUDA out of \
             memory: If you encounter GPU memory issues, try reducing the batch size or \
             switching to CPU mode by setting DEVICE=cpu in your environment variables.\nModule \
             not found errors: Ensure your virtual environment is activated and all \
             dependencies are installed. Try pip install -r requirements.txt again.",
    },
    Block::Heading("Next Steps"),
    Block::Paragraph(
      "Now that you have Outfit Guru installed, check out the Quick Start Guide \
       (/docs/quick-start) to learn how to use the application, or explore the API \
       Documentation (/docs/api/backend) for advanced integration options.",
    ),
  ],
};

pub static QUICK_START: Article = Article {
  title: "Quick Start Guide",
  lead: "Get up and running with Outfit Guru in just a few minutes",
  blocks: &[
    Block::Callout {
      kind: CalloutKind::Info,
      title: Some("Before You Start"),
      body: "Make sure you have completed the Installation Guide (/docs/installation) and have \
             both the backend and frontend servers running.",
    },
    Block::Heading("Step 1: Access the Application"),
    Block::Paragraph(
      "Open your web browser and navigate to `http://localhost:5173` (or the port you \
       configured). You should see the Outfit Guru homepage.",
    ),
    Block::Image {
      alt: "Outfit Guru Homepage",
      caption: "The Outfit Guru homepage with navigation and main features",
    },
    Block::Heading("Step 2: Upload Your First Image"),
    Block::Paragraph(
      "Click on the \"Try Outfit Detection\" button or navigate to the detection section. You \
       can upload an image in several ways:",
    ),
    Block::Bullets(&[
      "Drag and Drop: Simply drag an image file onto the upload area",
      "Click to Browse: Click the upload button to select a file",
      "Paste from Clipboard: Use Ctrl+V to paste an image",
    ]),
    Block::Callout {
      kind: CalloutKind::Tip,
      title: Some("Supported Formats"),
      body: "Outfit Guru supports common image formats: JPEG, PNG, WebP, and GIF. Maximum file \
             size is 10MB. For best results, use high-resolution images with clear visibility \
             of clothing items.",
    },
    Block::Heading("Step 3: Configure Detection Settings"),
    Block::Paragraph("Before running detection, you can adjust various settings:"),
    Block::Subheading("Detection Settings"),
    Block::Bullets(&[
      "Confidence Threshold (0.3-0.9)",
      "Face Blurring (On/Off)",
      "Model Selection (YOLOv8n/s/m)",
      "Output Format (JSON/Visual)",
    ]),
    Block::Subheading("Analysis Options"),
    Block::Bullets(&[
      "Style Analysis (LLM-powered)",
      "Color Palette Extraction",
      "Outfit Recommendations",
      "Trend Analysis",
    ]),
    Block::Heading("Step 4: Run Outfit Detection"),
    Block::Paragraph(
      "Click the \"Analyze Outfit\" button to start the detection process. The system will:",
    ),
    Block::Steps(&[
      "Upload and preprocess your image",
      "Apply face blurring (if enabled)",
      "Run YOLO object detection",
      "Perform style analysis (if enabled)",
      "Generate recommendations",
    ]),
    Block::Heading("Step 5: View Results"),
    Block::Paragraph("Once processing is complete, you'll see comprehensive results including:"),
    Block::Subheading("Detection Results"),
    Block::Bullets(&[
      "Bounding boxes around detected items",
      "Item labels (shirt, pants, shoes, etc.)",
      "Confidence scores for each detection",
      "Color information and style attributes",
    ]),
    Block::Subheading("Style Analysis"),
    Block::Code {
      language: "json",
      filename: Some("style_analysis.json"),
      body: r#"{
  "overall_style": "Casual Business",
  "color_scheme": "Monochromatic",
  "key_pieces": [
    {"item": "blazer", "color": "navy blue", "style": "fitted", "confidence": 0.94},
    {"item": "trousers", "color": "charcoal", "style": "straight-leg", "confidence": 0.89}
  ],
  "style_score": 8.5,
  "recommendations": [
    "Consider adding a pop of color with accessories",
    "Brown leather shoes would complement this outfit",
    "A subtle pattern tie could add visual interest"
  ]
}"#,
    },
    Block::Heading("Step 6: Explore Advanced Features"),
    Block::Cards(&[
      Card {
        title: "🔄 Batch Processing",
        body: "Upload multiple images for batch analysis and comparison",
        href: None,
      },
      Card {
        title: "📊 Analytics Dashboard",
        body: "View detailed analytics and trends across your outfit analyses",
        href: None,
      },
      Card {
        title: "💾 Export Results",
        body: "Export detection results in various formats (JSON, CSV, PDF)",
        href: None,
      },
    ]),
    Block::Heading("Using the API Directly"),
    Block::Paragraph(
      "For developers, you can interact with the Outfit Guru API directly. Here's a simple \
       example using Python:",
    ),
    Block::Code {
      language: "python",
      filename: Some("api_example.py"),
      body: r#"import requests

url = "http://localhost:8000/api/detect-outfit"
files = {"file": open("my_outfit.jpg", "rb")}
data = {"confidence_threshold": 0.5, "enable_face_blur": True, "enable_style_analysis": True}

response = requests.post(url, files=files, data=data)
if response.status_code == 200:
    for item in response.json()["detected_items"]:
        print(f"  - {item['label']}: {item['confidence']:.2f}")
else:
    print(f"Error: {response.status_code} - {response.text}")"#,
    },
    Block::Heading("Command Line Interface"),
    Block::Paragraph("Outfit Guru also provides a CLI for batch processing and automation:"),
    Block::Code {
      language: "bash",
      filename: None,
      body: r"# Analyze a single image
python -m outfit_guru.cli analyze --input my_outfit.jpg --output results.json

# Batch process a directory
python -m outfit_guru.cli batch --input-dir ./images --output-dir ./results

# Generate a report
python -m outfit_guru.cli report --input results.json --format pdf",
    },
    Block::Callout {
      kind: CalloutKind::Success,
      title: Some("Congratulations!"),
      body: "You've successfully completed your first outfit analysis with Outfit Guru! You now \
             know the basic workflow and can start exploring more advanced features.",
    },
    Block::Heading("Next Steps"),
    Block::Cards(&[
      Card {
        title: "🔍 Deep Dive: Outfit Detection",
        body: "Learn about the AI models and detection algorithms",
        href: Some("/docs/outfit-detection"),
      },
      Card {
        title: "📖 API Documentation",
        body: "Complete API reference and advanced usage examples",
        href: Some("/docs/api/backend"),
      },
      Card {
        title: "🧩 UI Components",
        body: "Integrate Outfit Guru components into your own applications",
        href: Some("/docs/components"),
      },
      Card {
        title: "🚀 Deployment Guide",
        body: "Deploy Outfit Guru to production environments",
        href: Some("/docs/deployment/docker"),
      },
    ]),
    Block::Callout {
      kind: CalloutKind::Tip,
      title: Some("Need Help?"),
      body: "If you encounter any issues or have questions, check out our troubleshooting \
             section (/docs/contributing) or reach out to the community for support.",
    },
  ],
};

pub static OUTFIT_DETECTION: Article = Article {
  title: "Outfit Detection",
  lead: "AI-powered clothing item detection using advanced computer vision models",
  blocks: &[
    Block::Heading("Overview"),
    Block::Paragraph(
      "Outfit Guru's detection system uses state-of-the-art YOLO (You Only Look Once) models to \
       identify and classify clothing items in images. The system can detect various clothing \
       categories including tops, bottoms, footwear, accessories, and more.",
    ),
    Block::Image {
      alt: "Outfit detection example",
      caption: "Example of outfit detection with bounding boxes and labels",
    },
    Block::Heading("Supported Clothing Categories"),
    Block::Subheading("👕 Tops"),
    Block::Bullets(&["Shirts", "T-shirts", "Tops", "Sweaters", "Jackets", "Blazers"]),
    Block::Subheading("👖 Bottoms"),
    Block::Bullets(&["Pants", "Jeans", "Shorts", "Skirts", "Dresses"]),
    Block::Subheading("👟 Accessories"),
    Block::Bullets(&["Shoes", "Bags", "Hats", "Belts", "Jewelry", "Sunglasses"]),
    Block::Heading("Model Architecture"),
    Block::Paragraph(
      "The detection system is built on YOLOv8, which provides an excellent balance between \
       accuracy and speed. We offer different model variants:",
    ),
    Block::Table {
      header: &["Model", "Size", "Speed", "Accuracy", "Use Case"],
      rows: &[
        &["YOLOv8n", "6.2MB", "⚡ Fast", "📊 Good", "Real-time applications"],
        &["YOLOv8s", "21.5MB", "⚡ Balanced", "📊 Better", "Recommended (Default)"],
        &["YOLOv8m", "49.7MB", "⚡ Slower", "📊 Best", "High-accuracy needs"],
      ],
    },
    Block::Callout {
      kind: CalloutKind::Tip,
      title: Some("Model Selection"),
      body: "For most use cases, we recommend YOLOv8s as it provides the best balance between \
             speed and accuracy. Use YOLOv8n for real-time applications where speed is critical, \
             or YOLOv8m when maximum accuracy is required.",
    },
    Block::Heading("Detection Process"),
    Block::Paragraph("The outfit detection process consists of several stages:"),
    Block::Steps(&[
      "Image Preprocessing: Resize, normalize, and prepare the image for model inference. Apply \
       face blurring if enabled for privacy protection.",
      "Object Detection: Run the YOLO model to detect clothing items and generate bounding boxes \
       with confidence scores.",
      "Post-processing: Apply Non-Maximum Suppression (NMS) to remove duplicate detections and \
       filter results by confidence threshold.",
      "Result Generation: Format detection results with labels, coordinates, confidence scores, \
       and additional metadata.",
    ]),
    Block::Heading("Configuration Parameters"),
    Block::Paragraph("You can customize the detection behavior using various parameters:"),
    Block::Code {
      language: "python",
      filename: Some("detection_config.py"),
      body: r#"DETECTION_CONFIG = {
    "model_path": "weights/yolov8s.pt",
    "device": "cuda",  # or "cpu"
    "confidence_threshold": 0.5,    # Minimum confidence for detections
    "iou_threshold": 0.4,           # IoU threshold for NMS
    "max_detections": 300,          # Maximum number of detections
    "input_size": 640,              # Model input size (640x640)
    "enable_face_blur": True,       # Privacy protection
    "blur_strength": 15,            # Gaussian blur kernel size
    "save_annotated_image": True,   # Save image with bounding boxes
    "include_crops": False,         # Include cropped detected items
    "output_format": "json"         # json, xml, or csv
}"#,
    },
    Block::Heading("API Usage"),
    Block::Subheading("Basic Detection Request"),
    Block::Code {
      language: "python",
      filename: Some("basic_detection.py"),
      body: r#"import requests
import json

url = "http://localhost:8000/api/detect-outfit"
files = {"file": open("outfit_image.jpg", "rb")}
data = {"confidence_threshold": 0.5, "enable_face_blur": True, "model": "yolov8s"}

response = requests.post(url, files=files, data=data)
if response.status_code == 200:
    print(json.dumps(response.json(), indent=2))
else:
    print(f"Error: {response.status_code}")"#,
    },
    Block::Subheading("Response Format"),
    Block::Code {
      language: "json",
      filename: Some("detection_response.json"),
      body: r##"{
  "success": true,
  "processing_time": 1.23,
  "image_info": {"width": 800, "height": 600, "format": "JPEG"},
  "detected_items": [
    {
      "id": 0,
      "label": "shirt",
      "confidence": 0.92,
      "bbox": {"x1": 150, "y1": 100, "x2": 350, "y2": 300},
      "center": {"x": 250, "y": 200},
      "area": 40000,
      "color_info": {
        "dominant_color": "#4A90E2",
        "color_name": "blue",
        "color_palette": ["#4A90E2", "#FFFFFF", "#2C3E50"]
      }
    }
  ],
  "statistics": {
    "total_items": 5,
    "categories": {"tops": 2, "bottoms": 1, "shoes": 1, "accessories": 1}
  },
  "annotated_image_url": "/blurred_uploads/abc123_annotated.jpg"
}"##,
    },
    Block::Heading("Advanced Features"),
    Block::Subheading("Batch Processing"),
    Block::Paragraph("Process multiple images in a single request:"),
    Block::Code {
      language: "python",
      filename: Some("batch_detection.py"),
      body: r#"import requests

url = "http://localhost:8000/api/batch-detect"
files = [
    ("files", open("outfit1.jpg", "rb")),
    ("files", open("outfit2.jpg", "rb")),
    ("files", open("outfit3.jpg", "rb"))
]
data = {"confidence_threshold": 0.6, "enable_style_analysis": True}

results = requests.post(url, files=files, data=data).json()
for i, result in enumerate(results["batch_results"]):
    print(f"Image {i+1}: {len(result['detected_items'])} items detected")"#,
    },
    Block::Subheading("Custom Model Integration"),
    Block::Paragraph("You can integrate your own trained models:"),
    Block::Code {
      language: "python",
      filename: Some("custom_model.py"),
      body: r#"from outfit_guru.models import CustomDetector

detector = CustomDetector(
    model_path="path/to/your/model.pt",
    config_path="path/to/config.yaml"
)
detector.register_model("my_custom_model")

data = {"model": "my_custom_model", "confidence_threshold": 0.7}"#,
    },
    Block::Heading("Performance Optimization"),
    Block::Callout {
      kind: CalloutKind::Info,
      title: Some("Optimization Tips"),
      body: "GPU Acceleration: Use CUDA-enabled PyTorch for 10x faster processing\nBatch Size: \
             Process multiple images together to improve throughput\nImage Preprocessing: \
             Resize images to optimal dimensions (640x640)\nModel Selection: Choose the right \
             model size for your speed/accuracy needs\nCaching: Enable result caching for \
             frequently processed images",
    },
    Block::Heading("Troubleshooting"),
    Block::Callout {
      kind: CalloutKind::Warning,
      title: Some("Common Issues"),
      body: "Low Detection Accuracy: try lowering the confidence threshold, use higher \
             resolution images, ensure good lighting and clear visibility, or switch to YOLOv8m \
             for better accuracy.\nSlow Processing: enable GPU acceleration with CUDA, use \
             YOLOv8n for faster processing, reduce image resolution before processing, or \
             disable unnecessary features like style analysis.\nMemory Issues: reduce batch \
             size, use a smaller model variant, process images sequentially instead of batch, \
             or clear GPU memory between requests.",
    },
    Block::Heading("Next Steps"),
    Block::Cards(&[
      Card {
        title: "🎨 Style Analysis",
        body: "Learn about AI-powered style analysis and recommendations",
        href: Some("/docs/style-analysis"),
      },
      Card {
        title: "🔒 Privacy Protection",
        body: "Understand face blurring and privacy features",
        href: Some("/docs/face-blur"),
      },
      Card {
        title: "📖 API Endpoints",
        body: "Complete API reference for all detection endpoints",
        href: Some("/docs/api/endpoints"),
      },
      Card {
        title: "🧩 UI Components",
        body: "Frontend components for outfit detection interfaces",
        href: Some("/docs/components/detection"),
      },
    ]),
  ],
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn article_renders_headings_and_code() {
    let text = DocPage::Article(&OUTFIT_DETECTION).to_string();
    assert!(text.starts_with("# Outfit Detection\n"));
    assert!(text.contains("## Model Architecture"));
    assert!(text.contains("| YOLOv8s | 21.5MB | ⚡ Balanced | 📊 Better | Recommended (Default) |"));
    assert!(text.contains("```python (detection_config.py)"));
    assert!(text.contains("  4. Result Generation"));
  }

  #[test]
  fn placeholder_and_not_found_text() {
    let placeholder = DocPage::Placeholder {
      title: "Face Blur",
      description: "Privacy protection with intelligent face blurring technology",
    };
    assert!(placeholder.to_string().contains("currently under development"));

    let missing = DocPage::NotFound("/docs/nope".to_string());
    assert_eq!(missing.title(), "Page Not Found");
    assert!(missing.to_string().contains("The page \"/docs/nope\" could not be found."));
  }

  #[test]
  fn callouts_carry_their_icon() {
    let block = Block::Callout {
      kind: CalloutKind::Warning,
      title: Some("Common Issues"),
      body: "Port already in use",
    };
    assert_eq!(block.to_string(), "⚠️ Common Issues\nPort already in use\n");
  }
}
